use crate::QuizApp;
use crate::model::UserRole;
use egui::{Button, CentralPanel, Color32, Context, Frame, Ui, Visuals};

/// Aplica las preferencias de accesibilidad y tema al contexto.
/// Parte siempre del estilo base para que el ajuste no se acumule.
pub fn aplicar_accesibilidad(app: &QuizApp, ctx: &Context) {
    let mut style = egui::Style::default();
    if app.prefs.dyslexic_mode {
        for font in style.text_styles.values_mut() {
            font.size *= 1.3;
        }
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
    }
    ctx.set_style(style);

    let mut visuals = if app.prefs.dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    if app.prefs.high_contrast {
        if app.prefs.dark_mode {
            visuals.override_text_color = Some(Color32::WHITE);
            visuals.panel_fill = Color32::BLACK;
            visuals.window_fill = Color32::BLACK;
            visuals.extreme_bg_color = Color32::BLACK;
        } else {
            visuals.override_text_color = Some(Color32::BLACK);
            visuals.panel_fill = Color32::WHITE;
            visuals.window_fill = Color32::WHITE;
            visuals.extreme_bg_color = Color32::WHITE;
        }
    }
    ctx.set_visuals(visuals);
}

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("nav_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label("🧠");
            ui.heading("MindSpark");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if app.user.is_some() {
                    if ui.button("🚪 Cerrar sesión").clicked() {
                        app.cerrar_sesion();
                        ctx.request_repaint();
                    }
                }
                if let Some(user) = &app.user {
                    let rol = match user.role {
                        UserRole::Teacher => "Profesora",
                        UserRole::Student => "Estudiante",
                    };
                    ui.label(format!("{} · {}", user.name, rol));
                }
            });
        });
    });
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- ACCESIBILIDAD Y TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                app.prefs.dark_mode = true;
            }
            if ui.button("☀ Modo claro").clicked() {
                app.prefs.dark_mode = false;
            }
            if ui
                .selectable_label(app.prefs.high_contrast, "◐ Alto contraste")
                .clicked()
            {
                app.prefs.high_contrast = !app.prefs.high_contrast;
            }
            if ui
                .selectable_label(app.prefs.dyslexic_mode, "🔤 Dislexia")
                .clicked()
            {
                app.prefs.dyslexic_mode = !app.prefs.dyslexic_mode;
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - panel_width) / 2.0);
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
