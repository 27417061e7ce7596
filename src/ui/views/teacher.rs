use crate::QuizApp;
use crate::view_models::{ResultRow, TeacherStats};
use egui::{Button, CentralPanel, Context, Grid, RichText, ScrollArea};

pub fn ui_teacher_dashboard(app: &mut QuizApp, ctx: &Context) {
    let stats: TeacherStats = app.teacher_stats();
    let resultados: Vec<ResultRow> = app.result_rows();
    let recientes: Vec<(String, usize, &'static str)> = app
        .quizzes
        .iter()
        .rev()
        .take(6)
        .map(|q| (q.title.clone(), q.questions.len(), q.difficulty.etiqueta()))
        .collect();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 760.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_width(panel_width);
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading("Panel del profesor");
                    ui.label("Gestiona tu clase y crea contenido");
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_sized([150.0, 36.0], Button::new("➕ Crear quiz"))
                        .clicked()
                    {
                        app.abrir_creacion();
                    }
                });
            });

            ui.add_space(12.0);

            // Tarjetas de estadísticas
            ui.columns(3, |cols| {
                stat_card(&mut cols[0], "📖 Quizzes activos", stats.quizzes_activos.to_string());
                stat_card(
                    &mut cols[1],
                    "✨ Generados con IA",
                    stats.generados_con_ia.to_string(),
                );
                stat_card(&mut cols[2], "🧠 Nota media", stats.media_label());
            });

            ui.add_space(16.0);

            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Quizzes recientes");
                ui.add_space(4.0);
                if recientes.is_empty() {
                    ui.label("Aún no hay quizzes. ¡Crea uno!");
                } else {
                    for (titulo, n_preguntas, dificultad) in &recientes {
                        egui::Frame::group(ui.style())
                            .inner_margin(egui::Margin::symmetric(12, 8))
                            .show(ui, |ui| {
                                ui.set_width(panel_width - 40.0);
                                ui.horizontal(|ui| {
                                    ui.vertical(|ui| {
                                        ui.label(RichText::new(titulo).strong());
                                        ui.label(format!(
                                            "{n_preguntas} preguntas · {dificultad}"
                                        ));
                                    });
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            ui.label("Activo");
                                        },
                                    );
                                });
                            });
                        ui.add_space(4.0);
                    }
                }

                ui.add_space(14.0);
                ui.heading("Resultados recientes");
                ui.add_space(4.0);
                if resultados.is_empty() {
                    ui.label("Todavía nadie ha completado un quiz.");
                } else {
                    Grid::new("teacher_results_grid")
                        .striped(true)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new("Estudiante").strong());
                            ui.label(RichText::new("Quiz").strong());
                            ui.label(RichText::new("Nota").strong());
                            ui.label(RichText::new("Fecha").strong());
                            ui.end_row();

                            for r in resultados.iter().take(10) {
                                ui.label(&r.student);
                                ui.label(&r.quiz_title);
                                ui.label(r.nota_label());
                                ui.label(&r.fecha);
                                ui.end_row();
                            }
                        });
                }
            });

            if !app.message.is_empty() {
                ui.add_space(6.0);
                ui.label(&app.message);
            }
        });
    });
}

fn stat_card(ui: &mut egui::Ui, titulo: &str, valor: String) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.label(titulo);
            ui.heading(valor);
        });
}
