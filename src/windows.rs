//! Good-weather window detection
//!
//! Scans an ordered slot sequence once and extracts maximal contiguous runs
//! of favorable slots, with aggregate statistics per run. Runs shorter than
//! [`MIN_WINDOW_SLOTS`] are dropped so single isolated good hours do not
//! show up as windows.

use crate::risk;
use crate::types::{Slot, Window};

/// Minimum run length for a run to qualify as a window
pub const MIN_WINDOW_SLOTS: usize = 2;

/// Rain probability ceiling (exclusive) of the default predicate
pub const DEFAULT_MAX_RAIN_PCT: f64 = 30.0;

/// UV index ceiling (exclusive) of the default predicate
pub const DEFAULT_MAX_UV_INDEX: f64 = 8.0;

/// The default favorability predicate.
///
/// A slot is good when its performance tier is at most Minor (level <= 1),
/// rain probability is below 30%, and UV index is below 8.
pub fn default_good_slot(slot: &Slot) -> bool {
    risk::classify(slot.wbgt_c).level() <= 1
        && slot.rain_chance_pct < DEFAULT_MAX_RAIN_PCT
        && slot.uv_index < DEFAULT_MAX_UV_INDEX
}

/// Detect windows using the default predicate
pub fn find_default_windows(slots: &[Slot]) -> Vec<Window> {
    find_windows(slots, default_good_slot)
}

/// Detect maximal contiguous runs of slots satisfying `predicate`.
///
/// Single pass over the sequence in its given order; windows come out in
/// encounter order. A run still open at the end of the input is evaluated
/// and emitted like any other. Removing an edge slot never changes how the
/// interior slots classify, since the predicate is applied per slot.
pub fn find_windows<P>(slots: &[Slot], predicate: P) -> Vec<Window>
where
    P: Fn(&Slot) -> bool,
{
    let mut windows = Vec::new();
    let mut run_start: Option<usize> = None;

    for (index, slot) in slots.iter().enumerate() {
        if predicate(slot) {
            run_start.get_or_insert(index);
        } else if let Some(start) = run_start.take() {
            close_run(slots, start, index - 1, &mut windows);
        }
    }

    // Flush a trailing run that reaches the end of the input
    if let Some(start) = run_start {
        close_run(slots, start, slots.len() - 1, &mut windows);
    }

    windows
}

fn close_run(slots: &[Slot], start: usize, end: usize, windows: &mut Vec<Window>) {
    let len = end - start + 1;
    if len < MIN_WINDOW_SLOTS {
        return;
    }

    let run = &slots[start..=end];
    let avg_wbgt_c = run.iter().map(|s| s.wbgt_c).sum::<f64>() / len as f64;
    let avg_uv_index = run.iter().map(|s| s.uv_index).sum::<f64>() / len as f64;
    let max_rain_pct = run
        .iter()
        .map(|s| s.rain_chance_pct)
        .fold(f64::MIN, f64::max);

    windows.push(Window {
        start,
        end,
        avg_wbgt_c,
        avg_uv_index,
        max_rain_pct,
    });
}
