use anyhow::{bail, Result};
use tracing::info;

use hscroll_core::scroll::{
    Clock, FrameScheduler, IntervalFrames, MemoryViewport, TokioClock,
};
use hscroll_core::{AppConfig, HorizontalScroll, ViewportHost};

pub struct SimulateOptions {
    pub content_width: i32,
    pub visible_width: i32,
    pub step: i32,
    pub clicks: u32,
    pub duration_ms: Option<u64>,
}

/// State of the viewport after one frame
#[derive(Debug, Clone, PartialEq)]
struct FrameRecord {
    frame: usize,
    time_ms: f64,
    offset: i32,
    can_scroll_left: bool,
    can_scroll_right: bool,
    /// Jobs finished so far
    done: u64,
}

async fn simulate(config: &AppConfig, options: &SimulateOptions) -> Result<Vec<FrameRecord>> {
    if options.visible_width <= 0 {
        bail!("visible width must be positive");
    }
    if options.content_width < 0 {
        bail!("content width must not be negative");
    }

    let mut scroll_config = config.ui.scroll.clone();
    scroll_config.show_arrows = true;
    if let Some(duration_ms) = options.duration_ms {
        scroll_config.animation_duration_ms = duration_ms;
    }

    let step = options.step;
    let mut scroll = HorizontalScroll::new(&scroll_config, true, TokioClock::new())
        .with_scroll_to_right(move |offset| offset.saturating_add(step));
    scroll.attach(MemoryViewport::new(options.visible_width, options.content_width));

    for _ in 0..options.clicks {
        scroll.scroll_right();
    }
    info!(
        queued = scroll.queued(),
        step,
        duration_ms = scroll_config.animation_duration_ms,
        "simulating"
    );

    let record = |frame: usize, scroll: &HorizontalScroll<MemoryViewport, TokioClock>| {
        FrameRecord {
            frame,
            time_ms: scroll.clock().now_ms(),
            offset: scroll.host().map(|h| h.scroll_offset()).unwrap_or_default(),
            can_scroll_left: scroll.can_scroll_left(),
            can_scroll_right: scroll.can_scroll_right(),
            done: scroll.animator().completed(),
        }
    };

    let mut records = vec![record(0, &scroll)];
    let mut frames = IntervalFrames::new(scroll_config.animation_tick_duration());
    while scroll.is_animating() {
        frames.next_frame().await;
        scroll.on_frame();
        records.push(record(records.len(), &scroll));
    }

    Ok(records)
}

pub async fn run(config: &AppConfig, options: SimulateOptions) -> Result<()> {
    let records = simulate(config, &options).await?;

    println!("{:>5}  {:>8}  {:>7}  left   right  done", "frame", "ms", "offset");
    for record in &records {
        println!(
            "{:>5}  {:>8.1}  {:>7}  {:<5}  {:<5}  {}",
            record.frame,
            record.time_ms,
            record.offset,
            record.can_scroll_left,
            record.can_scroll_right,
            record.done,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(clicks: u32) -> SimulateOptions {
        SimulateOptions {
            content_width: 1000,
            visible_width: 300,
            step: 250,
            clicks,
            duration_ms: Some(100),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_clicks_end_on_border() {
        let records = simulate(&AppConfig::default(), &options(4)).await.unwrap();
        let last = records.last().unwrap();

        assert_eq!(last.offset, 700);
        assert!(last.can_scroll_left);
        assert!(!last.can_scroll_right);
        // The last click starts on the border and finishes on its first frame
        assert_eq!(last.done, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_offsets_never_decrease() {
        let records = simulate(&AppConfig::default(), &options(2)).await.unwrap();
        assert!(records.windows(2).all(|w| w[0].offset <= w[1].offset));
        assert_eq!(records.last().map(|r| r.offset), Some(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_step_clamps_instead_of_overflowing() {
        let mut opts = options(2);
        opts.step = i32::MAX;
        let records = simulate(&AppConfig::default(), &opts).await.unwrap();
        let last = records.last().unwrap();
        assert_eq!(last.offset, 700);
        assert_eq!(last.done, 2);
        assert!(!last.can_scroll_right);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejects_empty_window() {
        let mut opts = options(1);
        opts.visible_width = 0;
        assert!(simulate(&AppConfig::default(), &opts).await.is_err());
    }
}
