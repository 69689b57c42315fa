use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = medkb_api::Args::parse();

	medkb_api::run(args).await
}
