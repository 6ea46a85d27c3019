//! Snapshot helpers for adapter-based render abstractions.

use crate::render::RenderFrame;

/// Assert a stable text snapshot for a render frame.
///
/// `expected` may include a trailing newline; it will be trimmed for comparison.
/// Trailing spaces on each row are ignored on both sides.
pub fn assert_render_frame_snapshot(label: &str, frame: &RenderFrame, expected: &str) {
    let expected = normalize(expected.trim_end_matches('\n'));
    let got = normalize(&frame.snapshot());
    assert_eq!(
        got, expected,
        "render frame snapshot mismatch ({label})\n--- expected\n{expected}\n--- got\n{got}",
    );
}

fn normalize(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::assert_render_frame_snapshot;
    use crate::render::{FrameSize, RenderFrame, TextRole};
    use crate::style::ThemeSpec;

    #[test]
    fn snapshot_ignores_trailing_padding() {
        let mut frame = RenderFrame::new(
            FrameSize {
                width: 8,
                height: 2,
            },
            ThemeSpec::default(),
        );
        frame.draw_text(0, 0, "SOS", TextRole::Danger);
        assert_render_frame_snapshot("sos", &frame, "SOS\n\n");
    }
}
