//! ASCII art for the next stair and per-type badges.

use crate::fb::Rgb;
use crate::types::{ObstacleType, Side};

/// Lines of stair art per frame.
pub const STAIR_ART_HEIGHT: usize = 4;

const LEFT_STAIR: [&str; STAIR_ART_HEIGHT] = [
    "       O  ",
    "      /|\\ ",
    "[___] / \\ ",
    "     [___]",
];

const RIGHT_STAIR: [&str; STAIR_ART_HEIGHT] = [
    "      O        ",
    "     /|\\       ",
    "     / \\ [___]",
    "    [___]      ",
];

/// The climber standing on the current stair with the next one on `side`.
pub fn stair_art(side: Side) -> &'static [&'static str; STAIR_ART_HEIGHT] {
    match side {
        Side::Left => &LEFT_STAIR,
        Side::Right => &RIGHT_STAIR,
    }
}

/// Label and color for a stair type, `None` for plain stairs.
pub fn type_badge(kind: ObstacleType) -> Option<(&'static str, Rgb)> {
    match kind {
        ObstacleType::Normal => None,
        ObstacleType::Falling => Some(("FALLING stair - it won't wait for you!", Rgb::new(240, 170, 60))),
        ObstacleType::Spiked => Some(("SPIKED stair - it hurts (-1)", Rgb::new(230, 70, 70))),
        ObstacleType::Reverse => Some(("REVERSE stair - left is right!", Rgb::new(180, 110, 240))),
        ObstacleType::Super => Some(("SUPER stair - +5!", Rgb::new(250, 220, 60))),
    }
}

/// Color of the stair art for a type.
pub fn stair_color(kind: ObstacleType) -> Rgb {
    type_badge(kind)
        .map(|(_, color)| color)
        .unwrap_or(Rgb::new(200, 200, 200))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn art_puts_stair_on_the_named_side() {
        // The free stair `[___]` on the climber's row sits on the stair side.
        let left = stair_art(Side::Left)[2];
        let right = stair_art(Side::Right)[2];
        assert!(left.trim_start().starts_with("[___]"));
        assert!(right.trim_end().ends_with("[___]"));
    }

    #[test]
    fn only_normal_has_no_badge() {
        for kind in ObstacleType::ALL {
            assert_eq!(type_badge(kind).is_none(), kind == ObstacleType::Normal);
        }
    }
}
