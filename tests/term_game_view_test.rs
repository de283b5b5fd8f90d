use std::time::Duration;

use endless_stairs::term::{stair_art, GameView, HudView, Viewport, TITLE};
use endless_stairs::types::{Obstacle, ObstacleType, Side};

fn hud(obstacle: Obstacle, remaining_ms: u64, banner: Option<&str>) -> HudView<'_> {
    HudView {
        player: "Ann",
        score: 12,
        obstacle,
        time_remaining: Duration::from_millis(remaining_ms),
        banner,
    }
}

#[test]
fn hud_shows_title_player_score_and_countdown() {
    let view = GameView::new(0);
    let fb = view.render(
        &hud(Obstacle::new(Side::Left, ObstacleType::Normal), 2350, None),
        Viewport::new(60, 20),
    );

    assert_eq!(fb.row_text(0), TITLE);
    assert_eq!(fb.row_text(1), "Climber: Ann");
    assert_eq!(fb.row_text(13), "Score: 12");
    assert_eq!(fb.row_text(14), "You have 2.4 seconds to choose!");
    assert_eq!(fb.row_text(15), "Jump left or right? (l/r)");
    assert_eq!(fb.row_text(17), "");
}

#[test]
fn stair_art_sits_at_the_bottom_of_the_frame() {
    let view = GameView::new(0);
    let fb = view.render(
        &hud(Obstacle::new(Side::Right, ObstacleType::Normal), 1000, None),
        Viewport::new(60, 20),
    );

    let art = stair_art(Side::Right);
    for (i, line) in art.iter().enumerate() {
        assert_eq!(fb.row_text(7 + i as u16), line.trim_end());
    }
    // Plain stairs carry no badge.
    assert_eq!(fb.row_text(11), "");
}

#[test]
fn special_stairs_get_a_badge_and_banner_shows_feedback() {
    let view = GameView::new(0);
    let fb = view.render(
        &hud(
            Obstacle::new(Side::Left, ObstacleType::Reverse),
            800,
            Some("Good jump!"),
        ),
        Viewport::new(60, 20),
    );

    assert_eq!(fb.row_text(11), "REVERSE stair - left is right!");
    assert_eq!(fb.row_text(17), "Good jump!");
}

#[test]
fn margin_shifts_everything_right() {
    let view = GameView::new(3);
    let fb = view.render(
        &hud(Obstacle::new(Side::Left, ObstacleType::Normal), 5000, None),
        Viewport::new(60, 20),
    );
    assert_eq!(fb.row_text(13), "   Score: 12");
}
