use common::model::bundle::ReportBundle;

/// Turns an assembled bundle into what gets sent to the client.
pub trait Renderer {
    type Output;

    fn render(&self, bundle: ReportBundle) -> Self::Output;
}

/// Hands the bundle over untouched, for serialization as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    type Output = ReportBundle;

    fn render(&self, bundle: ReportBundle) -> ReportBundle {
        bundle
    }
}
