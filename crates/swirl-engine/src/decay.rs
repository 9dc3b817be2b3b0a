//! Per-frame fade of scalar channels.

use swirl_core::ChannelDef;

/// Subtract the channel's decay from every cell, then clamp.
pub(crate) fn fade(def: &ChannelDef, cells: &mut [f32]) {
    if def.decay > 0.0 {
        for v in cells.iter_mut() {
            *v -= def.decay;
        }
    }

    match (def.clamp_min, def.clamp_max) {
        (Some(lo), Some(hi)) => {
            for v in cells.iter_mut() {
                *v = v.clamp(lo, hi);
            }
        }
        (Some(lo), None) => {
            for v in cells.iter_mut() {
                if *v < lo {
                    *v = lo;
                }
            }
        }
        (None, Some(hi)) => {
            for v in cells.iter_mut() {
                if *v > hi {
                    *v = hi;
                }
            }
        }
        (None, None) => {}
    }
}
