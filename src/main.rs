use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = mandelzoom::RenderArgs::parse();
    let config = args.explorer.to_config()?;
    let presenter = mandelzoom::PpmFilePresenter::new();
    let mut controller = mandelzoom::CliRenderController::new(presenter, &config)?;

    controller.apply_gestures(&args.gestures)?;
    controller.generate();
    controller.write(&args.output)?;

    Ok(())
}
