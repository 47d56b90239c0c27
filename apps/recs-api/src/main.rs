use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = recs_api::Args::parse();

	recs_api::run(args).await
}
