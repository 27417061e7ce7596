use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText};

pub fn ui_quiz_result(app: &mut QuizApp, ctx: &Context) {
    let Some(resumen) = app.last_completion.clone() else {
        app.volver_al_panel();
        return;
    };

    centered_panel(ctx, 340.0, 540.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(RichText::new("🎉 ¡Quiz completado!").size(28.0));
            ui.label(&resumen.quiz_title);
            ui.add_space(14.0);

            ui.heading(format!("{} / {}", resumen.score, resumen.max_score));
            ui.label(RichText::new(format!("+{} XP", resumen.xp_ganada)).strong());
            if resumen.perfecta {
                ui.label("⭐ ¡Bonus de 50 XP por partida perfecta!");
            }

            ui.add_space(10.0);
            ui.label(format!(
                "Nivel {} · {} XP acumulada",
                resumen.progression.level, resumen.progression.xp
            ));

            ui.add_space(18.0);
            if ui
                .add_sized([220.0, 40.0], Button::new("Volver al panel"))
                .clicked()
            {
                app.volver_al_panel();
            }
        });
    });
}
