use crate::QuizApp;
use crate::model::UserRole;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Align, Context, RichText};

pub fn ui_role_select(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 280.0, 560.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(RichText::new("🧠 MindSpark").size(32.0));
            ui.label("Plataforma de aprendizaje interactivo");
            ui.add_space(24.0);

            let row_w = (ui.available_width() * 0.9).clamp(320.0, 520.0);
            let (profesor, estudiante) =
                two_button_row(ui, row_w, "📋 Portal del profesor", "🎓 Soy estudiante");

            if profesor {
                app.seleccionar_rol(UserRole::Teacher);
            }
            if estudiante {
                app.seleccionar_rol(UserRole::Student);
            }

            if !app.message.is_empty() {
                ui.add_space(12.0);
                ui.label(&app.message);
            }
        });
    });
}
