//! Check command implementation.

use crate::cli::CheckArgs;
use crate::client::FactLensClient;
use crate::error::Result;
use crate::images::load_image;
use crate::output::Formatter;
use factlens_channel::embed_result;
use factlens_domain::FactCheckRequest;
use factlens_gatekeeper::Gatekeeper;

/// Build the request from command arguments, reading image files.
pub fn build_request(args: &CheckArgs) -> Result<FactCheckRequest> {
    let images = args
        .images
        .iter()
        .map(load_image)
        .collect::<Result<Vec<_>>>()?;

    Ok(FactCheckRequest {
        text: args.text.clone(),
        url: args.url.clone(),
        images: (!images.is_empty()).then_some(images),
    })
}

/// Execute the check command.
///
/// The request gate runs locally first, so an empty request never reaches
/// the network.
pub async fn execute_check(
    args: CheckArgs,
    client: &FactLensClient,
    formatter: &Formatter,
) -> Result<()> {
    let request = build_request(&args)?;
    Gatekeeper::new().admit(&request)?;

    let result = client.check(&request).await?;
    println!("{}", formatter.format_result(&result)?);

    if args.link {
        let link = embed_result(&client.results_url(), &result)?;
        println!();
        println!("{}", formatter.info("Open the results page:"));
        println!("{}", link);
    }

    Ok(())
}
