use crate::report::{clip, print_patch_preview};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_leaves_short_strings_alone() {
        assert_eq!(clip("short", 100), "short");
        assert_eq!(clip("", 0), "");
    }

    #[test]
    fn test_clip_truncates_long_strings() {
        let s = "a".repeat(50);
        let clipped = clip(&s, 10);
        assert!(clipped.starts_with("aaaaaaaaaa"));
        assert!(clipped.ends_with("[truncated]"));
    }

    #[test]
    fn test_clip_backs_up_to_a_char_boundary() {
        // A pound sign straddling the cap must not split mid-character.
        let mut s = "a".repeat(3999);
        s.push('£');
        s.push_str(&"b".repeat(100));

        let clipped = clip(&s, 4000);
        assert!(clipped.ends_with("[truncated]"));
        assert!(!clipped.contains('£'));

        // Cap landing exactly on the boundary keeps the character.
        let clipped = clip(&s, 4001);
        assert!(clipped.contains('£'));
    }

    #[test]
    fn test_preview_handles_long_multibyte_lines() {
        // Lines longer than the preview width, non-ASCII throughout.
        let old = format!("£{}£", "é".repeat(200));
        let new = (0..20)
            .map(|n| format!("row {n} — Quoted £45"))
            .collect::<Vec<_>>()
            .join("\n");

        // Must not panic on any boundary.
        print_patch_preview(&old, &new);
    }
}
