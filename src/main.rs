use trendsmenu::core::context::AppContext;
use trendsmenu::core::paths::AppPaths;
use trendsmenu::logging::LogTarget;
use trendsmenu::prompter::flows::menu_flow::MenuFlow;
use trendsmenu::prompter::prompter::Prompter;

fn main() {
    let paths = AppPaths::resolve();

    // Run from the install directory before anything else, so delegated
    // programs resolve their data and config relative to it.
    if let Err(err) = std::env::set_current_dir(&paths.workdir) {
        eprintln!("{err}");
        std::process::exit(1);
    }

    let mut ctx = match AppContext::new_with_paths(paths) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let prompter = Prompter::new();
    let flow = MenuFlow::new(&mut ctx);

    if let Err(err) = prompter.run(flow) {
        ctx.logger
            .error(format!("{err}"), LogTarget::ConsoleAndFile);
    }

    std::process::exit(ctx.outcome.exit_code());
}
