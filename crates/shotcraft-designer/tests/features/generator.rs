use async_trait::async_trait;
use shotcraft_designer::designer_state::DesignerState;
use shotcraft_designer::generator::{
    parse_response, GenerationError, GenerationErrorCategory, GenerationRequest,
    GenerationResponse, LayoutGenerator, StylePreset,
};
use shotcraft_designer::model::{Layer, LayerType};

struct FixedGenerator(Result<String, GenerationError>);

#[async_trait]
impl LayoutGenerator for FixedGenerator {
    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        tokio::task::yield_now().await;
        match &self.0 {
            Ok(text) => parse_response(text),
            Err(e) => Err(e.clone()),
        }
    }
}

const FULL_LAYOUT: &str = r##"{
    "backgroundColor": "#0f172a",
    "palette": ["#0f172a", "#ffffff", "#3b82f6"],
    "layers": [
        {"id": "bg", "type": "SHAPE", "name": "Background", "x": 0, "y": 0, "width": 428, "height": 926,
         "style": {"backgroundColor": "#0f172a"}},
        {"id": "phone", "type": "DEVICE", "name": "Phone", "x": 94, "y": 260, "width": 240, "height": 500,
         "rotation": 0, "content": "ignored", "locked": true},
        {"type": "TEXT", "name": "Headline", "x": 20, "y": 70, "width": 388, "height": 100,
         "content": "Track Every Beat", "style": {"fontSize": 32, "fontWeight": "bold", "textAlign": "justify"}},
        {"type": "TEXT", "name": "Broken", "x": 20, "y": "high", "width": 100, "height": 20}
    ]
}"##;

#[tokio::test]
async fn test_full_layout_generation_applies_in_one_step() {
    let mut state = DesignerState::new();
    state.add_layer(Layer::shape(0.0, 0.0, 30.0, 30.0));
    let before = state.canvas.layers().clone();

    let request = state.generation_request("Pulse", "Heart rate", StylePreset::Dark, None);
    let generator = FixedGenerator(Ok(FULL_LAYOUT.to_string()));
    let outcome = state.generate_with(&generator, &request).await;

    // a wrongly typed field fails the whole parse, nothing is applied
    assert!(matches!(outcome, Err(GenerationError::Parse(_))));
    assert_eq!(state.canvas.layers(), &before);
    assert!(!state.is_generating());

    let fixed = FULL_LAYOUT.replace(r#""y": "high""#, r#""y": 800"#);
    let generator = FixedGenerator(Ok(fixed));
    assert_eq!(state.generate_with(&generator, &request).await, Ok(true));

    let layers = state.canvas.layers();
    assert_eq!(layers.len(), 4);
    assert!(layers[0].locked);
    assert!(layers[1..].iter().all(|l| !l.locked && l.visible));
    assert_eq!(layers[1].layer_type, LayerType::Device);
    assert_eq!(layers[1].content, "device_frame");
    // malformed style falls back to type defaults
    assert_eq!(layers[2].style.font_size, Some(16.0));
    assert_eq!(state.canvas.config().background_color, "#0f172a");
    assert_eq!(state.palette.len(), 3);

    assert!(state.undo());
    assert_eq!(state.canvas.layers(), &before);
}

#[tokio::test]
async fn test_auth_failure_is_categorized() {
    let mut state = DesignerState::new();
    let request = state.generation_request("Pulse", "", StylePreset::Bold, None);
    let generator = FixedGenerator(Err(GenerationError::Auth("API key is missing".into())));

    let err = state.generate_with(&generator, &request).await.unwrap_err();
    assert_eq!(err.category(), GenerationErrorCategory::Auth);
    assert!(err.user_message().contains("API key"));
    assert!(state.canvas.is_empty());
    assert_eq!(state.history().len(), 1);
}

#[tokio::test]
async fn test_empty_response_text() {
    let mut state = DesignerState::new();
    let request = state.generation_request("Pulse", "", StylePreset::Bold, None);
    let generator = FixedGenerator(Ok(String::new()));
    assert_eq!(
        state.generate_with(&generator, &request).await,
        Err(GenerationError::EmptyResponse)
    );
}

#[tokio::test]
async fn test_result_after_dismiss_is_dropped() {
    let mut state = DesignerState::new();
    let request = state.generation_request("Pulse", "", StylePreset::Dark, None);
    let ticket = state.begin_generation();
    state.dismiss_generation();

    let response = FixedGenerator(Ok(FULL_LAYOUT.replace(r#""y": "high""#, r#""y": 1"#)))
        .generate(&request)
        .await;
    assert_eq!(state.complete_generation(ticket, &request, response), Ok(false));
    assert!(state.canvas.is_empty());
}
