//! Screen drawing
//!
//! Maps the current screen onto renderer calls. Reads state only.

use glam::Vec2;

use crate::platform::{Color, Renderer, TextAlign};
use crate::screen::{App, MAIN_MENU, MenuCursor, OptionList, Screen, Session, WIN_MENU};
use crate::sim::Entity;

pub const BLACK: Color = [0, 0, 0];
pub const WHITE: Color = [255, 255, 255];
pub const GREEN: Color = [0, 255, 0];
pub const RED: Color = [255, 0, 0];
pub const YELLOW: Color = [255, 255, 0];

/// Draw and present one frame of the current screen
pub fn draw(app: &App, renderer: &mut impl Renderer) {
    let size = app.context().screen;
    renderer.draw_rect(Vec2::ZERO, size, BLACK);

    match app.screen() {
        Screen::Menu { cursor } => {
            title(renderer, "SPACE INVADERS", size.x, 150.0, WHITE);
            options(renderer, &MAIN_MENU, cursor, size.x);
        }
        Screen::Playing(session) => play_field(renderer, session),
        Screen::Won { score, cursor } => {
            title(renderer, "YOU WIN!", size.x, 150.0, GREEN);
            title(renderer, &format!("Score: {score}"), size.x, 230.0, WHITE);
            options(renderer, &WIN_MENU, cursor, size.x);
        }
        Screen::Lost { score } => {
            title(renderer, "GAME OVER", size.x, 200.0, RED);
            title(renderer, &format!("Score: {score}"), size.x, 280.0, WHITE);
            title(renderer, "Press ENTER to return to menu", size.x, 340.0, GREEN);
        }
        Screen::Exit => {}
    }

    renderer.present_frame();
}

fn title(renderer: &mut impl Renderer, text: &str, width: f32, y: f32, color: Color) {
    renderer.draw_text(text, Vec2::new(width / 2.0, y), TextAlign::Center, color);
}

fn options(renderer: &mut impl Renderer, list: &OptionList, cursor: &MenuCursor, width: f32) {
    for (i, label) in list.labels.iter().enumerate() {
        let color = if i == cursor.selected() { GREEN } else { WHITE };
        let rect = list.rect(i, width);
        renderer.draw_text(label, rect.mid_top(), TextAlign::Center, color);
    }
}

fn play_field(renderer: &mut impl Renderer, session: &Session) {
    let state = &session.state;

    match &session.sprites {
        Some(sprites) => renderer.draw_image(&sprites.player, state.player.rect.pos),
        None => renderer.draw_rect(state.player.rect.pos, state.player.rect.size, GREEN),
    }

    for shot in &state.player_shots {
        let bounds = shot.bounding_box();
        renderer.draw_rect(bounds.pos, bounds.size, RED);
    }

    for enemy in state.formation.enemies() {
        match &session.sprites {
            Some(sprites) => renderer.draw_image(sprites.enemy(enemy.kind), enemy.rect.pos),
            None => renderer.draw_rect(enemy.rect.pos, enemy.rect.size, WHITE),
        }
    }

    for shot in &state.enemy_shots {
        let bounds = shot.bounding_box();
        renderer.draw_rect(bounds.pos, bounds.size, YELLOW);
    }

    renderer.draw_text(&format!("Score: {}", state.score), Vec2::new(10.0, 10.0), TextAlign::Left, WHITE);
    renderer.draw_text(
        &format!("Lives: {}", state.player.lives),
        Vec2::new(10.0, 50.0),
        TextAlign::Left,
        GREEN,
    );
}
