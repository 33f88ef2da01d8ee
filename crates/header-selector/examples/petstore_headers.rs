use header_selector::{HeaderSelector, OperationMedia};
use http::HeaderMap;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let operations = [
        (
            "addPet",
            OperationMedia::new().produces(["application/xml", "application/json"]).consumes("application/json"),
        ),
        ("findPetsByStatus", OperationMedia::new().produces(["application/json", "application/xml"])),
        ("uploadFile", OperationMedia::new().produces(["application/json"]).consumes("multipart/form-data")),
        ("getInventory", OperationMedia::new().produces(["text/html", "application/vnd.api+json", "application/json"])),
        ("deletePet", OperationMedia::new()),
    ];

    let selector = HeaderSelector::default();
    for (operation, media) in operations {
        let selected = media.select(&selector);

        let mut headers = HeaderMap::new();
        match selected.apply_to(&mut headers) {
            Ok(()) => info!(operation, ?headers, "selected request headers"),
            Err(e) => error!(operation, cause = %e, "failed to apply request headers"),
        }
    }
}
