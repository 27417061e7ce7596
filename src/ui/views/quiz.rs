use crate::QuizApp;
use crate::model::{AppState, QuestionKind};
use crate::ui::helpers::option_button;
use egui::{Align, Button, CentralPanel, Context, ProgressBar, RichText, ScrollArea, TextEdit};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Sin sesión no hay nada que pintar: volvemos al panel
    let Some(sesion) = app.session.as_ref() else {
        app.state = AppState::StudentDashboard;
        return;
    };
    let question = sesion.current_question().clone();
    let answered = sesion.answered;
    let streak = sesion.streak;
    let score = sesion.score;
    let fraccion = sesion.progress_fraction();
    let selected = sesion.selected_answer.clone();
    let es_ultima = sesion.is_last_question();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_width(panel_width);
            ui.add_space(8.0);

            // Cabecera: salida, racha y puntuación
            ui.horizontal(|ui| {
                if ui.button("SALIR").clicked() {
                    app.salir_del_quiz();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("🏆 {score}")).strong());
                    ui.label(RichText::new(format!("🔥 {streak}")).strong());
                });
            });
            if app.session.is_none() {
                return; // acaba de salir
            }

            ui.add_space(6.0);
            ui.add(ProgressBar::new(fraccion).desired_width(panel_width));
            ui.add_space(14.0);

            ScrollArea::vertical().show(ui, |ui| {
                ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                    ui.heading(&question.prompt);
                });
                ui.add_space(12.0);

                match question.kind {
                    QuestionKind::Mcq => {
                        for opt in &question.options {
                            let clicked = option_button(
                                ui,
                                opt,
                                panel_width,
                                answered,
                                *opt == question.correct_answer,
                                selected.as_deref() == Some(opt.as_str()),
                            );
                            if clicked {
                                app.procesar_respuesta(opt);
                            }
                            ui.add_space(6.0);
                        }
                    }
                    QuestionKind::TrueFalse => {
                        for opt in ["True", "False"] {
                            let clicked = option_button(
                                ui,
                                opt,
                                panel_width,
                                answered,
                                opt == question.correct_answer,
                                selected.as_deref() == Some(opt),
                            );
                            if clicked {
                                app.procesar_respuesta(opt);
                            }
                            ui.add_space(6.0);
                        }
                    }
                    QuestionKind::ShortAnswer => {
                        if answered {
                            ui.label(format!(
                                "Tu respuesta: {}",
                                selected.as_deref().unwrap_or("")
                            ));
                        } else {
                            if let Some(s) = app.session.as_mut() {
                                ui.add_sized(
                                    [panel_width, 30.0],
                                    TextEdit::singleline(&mut s.input)
                                        .hint_text("Escribe tu respuesta"),
                                );
                            }
                            ui.add_space(6.0);
                            if ui
                                .add_sized([panel_width / 2.0, 36.0], Button::new("Enviar"))
                                .clicked()
                            {
                                let respuesta = app
                                    .session
                                    .as_ref()
                                    .map(|s| s.input.clone())
                                    .unwrap_or_default();
                                app.procesar_respuesta(&respuesta);
                            }
                        }
                    }
                }

                // Corrección y explicación
                if answered {
                    ui.add_space(10.0);
                    let acierto = selected.as_deref() == Some(question.correct_answer.as_str());
                    egui::Frame::group(ui.style())
                        .inner_margin(egui::Margin::symmetric(14, 10))
                        .show(ui, |ui| {
                            ui.set_width(panel_width - 30.0);
                            if acierto {
                                ui.label(RichText::new("✅ ¡Excelente!").strong());
                            } else {
                                ui.label(RichText::new("❌ No es del todo correcto").strong());
                                ui.label(format!(
                                    "Respuesta correcta: {}",
                                    question.correct_answer
                                ));
                            }
                            ui.label(&question.explanation);
                        });

                    ui.add_space(10.0);
                    let etiqueta = if es_ultima {
                        "Finalizar 🏁"
                    } else {
                        "Siguiente ➡"
                    };
                    if ui
                        .add_sized([panel_width / 2.0, 40.0], Button::new(etiqueta))
                        .clicked()
                    {
                        app.avanzar_pregunta();
                    }
                }

                if !app.message.is_empty() {
                    ui.add_space(8.0);
                    ui.label(&app.message);
                }
            });
        });
    });
}
