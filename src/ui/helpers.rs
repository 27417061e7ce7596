// src/ui/helpers.rs
use crate::model::Difficulty;
use egui::{Button, Color32, RichText, Ui, Vec2};

/// Etiqueta de dificultad con el color de siempre: verde, amarillo, rojo.
pub fn difficulty_badge(ui: &mut Ui, difficulty: Difficulty) {
    let color = match difficulty {
        Difficulty::Easy => Color32::from_rgb(34, 160, 90),
        Difficulty::Medium => Color32::from_rgb(200, 160, 30),
        Difficulty::Hard => Color32::from_rgb(200, 70, 70),
    };
    ui.label(RichText::new(difficulty.etiqueta()).color(color).strong());
}

/// Botón de opción de respuesta a ancho completo. Tras responder, la opción
/// correcta se pinta en verde y la elegida errónea en rojo.
pub fn option_button(
    ui: &mut Ui,
    texto: &str,
    width: f32,
    answered: bool,
    is_correct: bool,
    is_selected: bool,
) -> bool {
    let mut boton = Button::new(texto).min_size(Vec2::new(width, 44.0));
    if answered {
        if is_correct {
            boton = boton.fill(Color32::from_rgb(30, 110, 60));
        } else if is_selected {
            boton = boton.fill(Color32::from_rgb(140, 40, 40));
        }
    }
    ui.add_enabled(!answered, boton).clicked()
}
