use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware() -> ApplicationMiddleware {
    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware { trace }
}
