//! The short frame: the seven-step operator cycle.

use super::{layer_lines, FrameStep};

pub(super) const STEPS: &[FrameStep] = &[
    FrameStep {
        title: "Name & Bind",
        literal: "Identify the matter, bind in the vessel, open the cycle with invocations (daiin).",
        figurative: "The name calls the soul to action; the vessel holds intent.",
    },
    FrameStep {
        title: "Divide & Portion",
        literal: "Split into halves/thirds; assign portions; chedy marks fixation points.",
        figurative: "Separation defines inner conflict; parts must know themselves.",
    },
    FrameStep {
        title: "Solve",
        literal: "Wash/circulate (shol/chor); soften and separate.",
        figurative: "Washing purifies ego; flow liberates spirit.",
    },
    FrameStep {
        title: "Distil",
        literal: "Raise and return the subtle (shody/qokedy); condense as dew.",
        figurative: "Distilling refines insight; vapor rises, truth condenses.",
    },
    FrameStep {
        title: "Conjoin",
        literal: "Recombine fractions (cfhol) under measured heat.",
        figurative: "Union heals duality; opposites embrace.",
    },
    FrameStep {
        title: "Fix",
        literal: "Seal interim results (y endings), weigh against root heaviness (Saturn).",
        figurative: "Fixing grounds the Self; realization stabilizes the soul.",
    },
    FrameStep {
        title: "Perfect",
        literal: "Advance through colours to red; crown under Sol; close with a final seal.",
        figurative: "Rubedo crowns the seeker; the Work completes with wisdom.",
    },
];

/// One numbered line per step in each layer, no spacing.
pub(super) fn body() -> (Vec<String>, Vec<String>) {
    let literal = layer_lines(STEPS, false, |n, step| {
        vec![format!("{}) {} — {}", n, step.title, step.literal)]
    });
    let figurative = layer_lines(STEPS, false, |n, step| {
        vec![format!("{}) {}", n, step.figurative)]
    });
    (literal, figurative)
}
