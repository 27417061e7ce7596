use super::*;
use crate::model::{AppState, UserRole};

impl QuizApp {
    /// Entra como profesor o estudiante. Si el perfil guardado ya tiene ese
    /// rol se conserva (y con él la progresión); si no, se crea uno nuevo.
    pub fn seleccionar_rol(&mut self, rol: UserRole) {
        let conservar = self.user.as_ref().is_some_and(|u| u.role == rol);
        if !conservar {
            self.user = Some(UserProfile::nuevo(rol));
        }

        self.state = match rol {
            UserRole::Teacher => AppState::TeacherDashboard,
            UserRole::Student => AppState::StudentDashboard,
        };
        self.message.clear();
    }

    pub fn cerrar_sesion(&mut self) {
        self.user = None;
        self.session = None;
        self.state = AppState::RoleSelect;
        self.message.clear();
    }

    pub fn abrir_creacion(&mut self) {
        self.state = AppState::CreateQuiz;
        self.message.clear();
    }

    /// Vuelve al panel que corresponda al rol actual.
    pub fn volver_al_panel(&mut self) {
        self.state = match self.user.as_ref().map(|u| u.role) {
            Some(UserRole::Teacher) => AppState::TeacherDashboard,
            Some(UserRole::Student) => AppState::StudentDashboard,
            None => AppState::RoleSelect,
        };
        self.message.clear();
    }
}
