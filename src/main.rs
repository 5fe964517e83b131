// Entrypoint: `image-upload <file_path> <auth_token> <parent_id>`.
// Any error ends the process with a non-zero exit and the error chain on
// stderr; on success the response JSON is the only line on stdout.

use image_upload::{api::ApiClient, cli, cli::UploadArgs, logger};

fn main() -> anyhow::Result<()> {
    logger::setup_logger();

    let args = UploadArgs::from_args(std::env::args_os())?;
    let api = ApiClient::default_endpoint()?;

    let resp = cli::run(&args, api)?;
    cli::print_response(&mut std::io::stdout().lock(), &resp)?;
    Ok(())
}
