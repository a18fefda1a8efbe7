use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = mandelzoom::GuiArgs::parse();
    let config = args.to_config()?;
    let presenter_factory = mandelzoom::PixelsPresenterFactory::new();
    let command = mandelzoom::RunGuiCommand::new(presenter_factory, config);

    command.execute()?;

    Ok(())
}
