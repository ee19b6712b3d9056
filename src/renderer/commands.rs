//! Draw-command generation for the scene
//!
//! Every frame draws the same five commands in the same order: clear, box
//! outline, ball, tether line, distance readout.

use glam::Vec2;

use crate::consts::{HUD_TEXT_POS, STROKE_WIDTH};
use crate::sim::Frame;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Scene palette
pub mod palette {
    use super::Color;

    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
    pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
}

/// One drawing primitive, in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    RectOutline {
        pos: Vec2,
        size: Vec2,
        color: Color,
        width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
    Text {
        pos: Vec2,
        text: String,
        color: Color,
    },
}

/// Encode one frame into the scene's draw order
pub fn encode_frame(frame: &Frame) -> Vec<DrawCmd> {
    vec![
        DrawCmd::Clear(palette::BLACK),
        DrawCmd::RectOutline {
            pos: frame.bounds.pos,
            size: frame.bounds.size,
            color: palette::WHITE,
            width: STROKE_WIDTH,
        },
        DrawCmd::FillCircle {
            center: frame.ball_pos,
            radius: frame.ball_radius,
            color: palette::RED,
        },
        DrawCmd::Line {
            from: frame.line_from,
            to: frame.line_to,
            color: palette::YELLOW,
            width: STROKE_WIDTH,
        },
        DrawCmd::Text {
            pos: Vec2::new(HUD_TEXT_POS.0, HUD_TEXT_POS.1),
            text: frame.distance_label.clone(),
            color: palette::YELLOW,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimState;

    #[test]
    fn test_encode_order_and_palette() {
        let state = SimState::new();
        let frame = Frame::capture(&state);

        let cmds = encode_frame(&frame);
        assert_eq!(cmds.len(), 5);
        assert_eq!(cmds[0], DrawCmd::Clear(palette::BLACK));
        match &cmds[1] {
            DrawCmd::RectOutline {
                pos,
                size,
                color,
                width,
            } => {
                assert_eq!(*pos, Vec2::new(50.0, 50.0));
                assert_eq!(*size, Vec2::new(700.0, 500.0));
                assert_eq!(*color, palette::WHITE);
                assert_eq!(*width, 2.0);
            }
            other => panic!("expected rect outline, got {other:?}"),
        }
        match &cmds[2] {
            DrawCmd::FillCircle {
                center,
                radius,
                color,
            } => {
                assert_eq!(*center, Vec2::new(400.0, 300.0));
                assert_eq!(*radius, 20.0);
                assert_eq!(*color, palette::RED);
            }
            other => panic!("expected filled circle, got {other:?}"),
        }
        assert!(matches!(cmds[3], DrawCmd::Line { .. }));
        match &cmds[4] {
            DrawCmd::Text { pos, text, color } => {
                assert_eq!(*pos, Vec2::new(20.0, 20.0));
                assert_eq!(text, "Distance: 0.00");
                assert_eq!(*color, palette::YELLOW);
            }
            other => panic!("expected text command, got {other:?}"),
        }
    }

    #[test]
    fn test_tether_line_tracks_ball() {
        let mut state = SimState::new();
        state.ball.pos = Vec2::new(120.0, 500.0);
        let frame = Frame::capture(&state);

        let cmds = encode_frame(&frame);
        match cmds[3] {
            DrawCmd::Line { from, to, .. } => {
                assert_eq!(from, Vec2::new(400.0, 300.0));
                assert_eq!(to, Vec2::new(120.0, 500.0));
            }
            ref other => panic!("expected line command, got {other:?}"),
        }
    }
}
