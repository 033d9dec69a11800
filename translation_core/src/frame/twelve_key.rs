//! The long frame: twelve keys of the work, each read in the lab and in the soul.

use super::{layer_lines, FrameStep};

pub(super) const STEPS: &[FrameStep] = &[
    FrameStep {
        title: "Vessel & Naming",
        literal: "The matter is named and bound in its vessel. The root marks the body (Salt), fixed under Saturn’s weight. Invocation is repeated in glyphs (e.g., daiin) and leaf pairing, sealing the beginning of the work.",
        figurative: "The vessel is both the physical flask and the soul’s container. Invocation awakens both the material and the self to the alchemical journey.",
    },
    FrameStep {
        title: "Division",
        literal: "The one is divided into twain and thrice: leaf pairs show duality, triplets imply the tria prima. Repetitions (daiin/aiin) and fixatives (chedy) portion the matter.",
        figurative: "The division marks not only chemical partition but the mystical separation of ego and essence.",
    },
    FrameStep {
        title: "Dissolution",
        literal: "Stems and loops mark circulation and washing. Tokens like shol/chor indicate solve in water; the matter is softened and set apart.",
        figurative: "Dissolution serves to cleanse material and purify the inner self through surrender.",
    },
    FrameStep {
        title: "Distillation",
        literal: "Droplet-like signs and repeated shody/qokedy patterns suggest distillation. Vapour rises and returns as dew; the subtle is separated from the gross.",
        figurative: "Distillation echoes the ascent of spirit; impurities fall away in both lab and life.",
    },
    FrameStep {
        title: "Conjunction",
        literal: "Two buds appear, closed then opening: Sulphur unites with Mercury. Conjunction signs (cfhol) and daiin repetitions confirm the aim.",
        figurative: "Conjunction reflects union: Sulphur and Mercury, masculine and feminine, body and soul.",
    },
    FrameStep {
        title: "Black Phase (Nigredo)",
        literal: "Darkness of the root signals nigredo. The body putrefies; successive shody seals fix the stage.",
        figurative: "Nigredo symbolizes the dark night of the soul; the blackening before rebirth.",
    },
    FrameStep {
        title: "White Phase (Albedo)",
        literal: "Leaves pale; east–west orientation encodes invocation and washing. Luna presides; the spirit clarifies.",
        figurative: "Albedo washes the psyche clean; Luna’s light reveals the purified spirit.",
    },
    FrameStep {
        title: "Yellow Phase (Citrinitas)",
        literal: "Intermediate yellowing under Mars’s heat prepares perfection. Iterative forms (chedy, cthar) track cycles.",
        figurative: "Citrinitas is the dawning awareness; Mars forges willpower in transformation.",
    },
    FrameStep {
        title: "Red Phase (Rubedo)",
        literal: "The two red buds are the clearest cipher: open and red = Rubedo, the crown of the Work. Sol governs completion.",
        figurative: "Rubedo completes the cycle: the alchemist becomes the Stone.",
    },
    FrameStep {
        title: "Planetary Governance",
        literal: "Saturn delays, Mars heats, Luna moistens, Sol perfects; leaf direction hints Air and Water. Planetary order binds the phases.",
        figurative: "Planetary forces don’t just guide reactions; they govern stages of inner development.",
    },
    FrameStep {
        title: "Circulation & Return",
        literal: "Cycles of daiin, shol, chor command: solve → coagula → fix. Vapours rise and fall; leaf pairs confirm counts (2, 3, 7).",
        figurative: "Circulation mirrors breath, prayer, and meditation: the Work is not linear.",
    },
    FrameStep {
        title: "Seal & Completion",
        literal: "Final y-terminations act as seals. With buds now red/open, the final conjunction is declared: the Work is closed and fixed.",
        figurative: "The seal closes not only a flask, but also a rite. Completion blesses both craft and soul.",
    },
];

/// Literal layer: `Step N — Title` over its description, steps separated by a
/// blank line. Figurative layer: one line per step, same spacing.
pub(super) fn body() -> (Vec<String>, Vec<String>) {
    let literal = layer_lines(STEPS, true, |n, step| {
        vec![
            format!("Step {} — {}", n, step.title),
            step.literal.to_string(),
        ]
    });
    let figurative = layer_lines(STEPS, true, |_, step| vec![step.figurative.to_string()]);
    (literal, figurative)
}
