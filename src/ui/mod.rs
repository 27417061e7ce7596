mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{aplicar_accesibilidad, bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // El estilo se reconstruye desde la base en cada frame
        aplicar_accesibilidad(self, ctx);

        // Recoger el resultado de la generación en vuelo, si la hay
        self.poll_generacion();
        if self.is_generation_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(150));
        }

        // BARRA SUPERIOR con usuario y cierre de sesión (fuera del selector
        // de rol y del modo inmersivo de quiz)
        if !matches!(self.state, AppState::RoleSelect | AppState::Quiz) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR DE ACCESIBILIDAD Y TEMA
        bottom_panel(self, ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::RoleSelect => views::role_select::ui_role_select(self, ctx),
            AppState::TeacherDashboard => views::teacher::ui_teacher_dashboard(self, ctx),
            AppState::CreateQuiz => views::create::ui_create_quiz(self, ctx),
            AppState::StudentDashboard => views::student::ui_student_dashboard(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::QuizResult => views::results::ui_quiz_result(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
