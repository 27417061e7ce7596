use mind_spark::QuizApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "MindSpark - Plataforma de Aprendizaje",
        options,
        Box::new(|cc| {
            // Restaura la app persistida; si no hay nada guardado, arranca limpia
            let app = cc
                .storage
                .and_then(|storage| eframe::get_value::<QuizApp>(storage, eframe::APP_KEY))
                .unwrap_or_else(QuizApp::new);
            Ok(Box::new(app))
        }),
    )
}
