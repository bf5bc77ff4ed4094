//! Final prompt assembly
//!
//! Pure derivation from the translated prompt parts to the two-field output
//! document. No state, no I/O; the session recomputes this on demand.

use crate::models::{FinalPromptDocument, PromptParts};

/// Fixed negative prompt paired with every assembled document.
pub const NEGATIVE_PROMPT: &str = "text, watermark, logo, signature, blurry, low quality, \
    deformed hands, extra fingers, bad anatomy, disfigured, duplicate, cropped, jpeg artifacts";

const QUALITY_TAGS: [&str; 3] = ["ultra realistic", "high detail", "8k"];

/// Build the final document from translated parts.
///
/// Returns `None` while the subject is blank, which suppresses the output
/// panel before the first successful generation. Blank segments are dropped
/// so a missing pose never leaves a double comma behind.
pub fn assemble_final(parts: &PromptParts) -> Option<FinalPromptDocument> {
    if !parts.has_subject() {
        return None;
    }

    let camera_segment = if parts.camera.trim().is_empty() {
        String::new()
    } else {
        format!("style of {}", parts.camera)
    };

    let prompt = [
        parts.subject.as_str(),
        parts.pose.as_str(),
        parts.background.as_str(),
        camera_segment.as_str(),
        QUALITY_TAGS[0],
        QUALITY_TAGS[1],
        QUALITY_TAGS[2],
    ]
    .iter()
    .filter(|segment| !segment.trim().is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(", ");

    Some(FinalPromptDocument {
        prompt,
        negative_prompt: NEGATIVE_PROMPT.to_string(),
    })
}
