use contextllm_core::config::PromptConfig;
use contextllm_core::models::Chunk;
use contextllm_prompt::{ChatMessage, PromptBuilder};

fn sample_chunks() -> Vec<Chunk> {
    vec![
        Chunk::new("c1", "First fragment.", 4, 0.9).with_source("intro.md"),
        Chunk::new("c2", "Second fragment.", 4, 0.8),
    ]
}

#[test]
fn context_section_preserves_commit_order_and_sources() {
    let builder = PromptBuilder::default();
    let chunks = sample_chunks();
    let refs: Vec<&Chunk> = chunks.iter().collect();
    let section = builder.build_context_section(&refs);

    let first = section.find("First fragment.").expect("first chunk");
    let second = section.find("Second fragment.").expect("second chunk");
    assert!(first < second);
    assert!(section.contains("[Context 1 from intro.md]"));
    assert!(section.contains("[Context 2 from unknown]"));
}

#[test]
fn empty_selection_yields_placeholder_context() {
    let builder = PromptBuilder::default();
    assert_eq!(builder.build_context_section(&[]), "No context provided.");
}

#[test]
fn messages_carry_system_context_and_user_query() {
    let builder = PromptBuilder::with_system_prompt("Answer from context.");
    let chunks = sample_chunks();
    let refs: Vec<&Chunk> = chunks.iter().collect();
    let messages = builder.build_messages("What is this?", &refs);

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, "system");
    assert!(messages[0].content.starts_with("Answer from context."));
    assert!(messages[0].content.contains("First fragment."));
    assert_eq!(messages[1], ChatMessage::user("What is this?"));
}

#[test]
fn metadata_summary_is_appended_when_configured() {
    let config = PromptConfig {
        include_context_metadata: true,
        ..Default::default()
    };
    let builder = PromptBuilder::new(&config);
    let chunks = sample_chunks();
    let refs: Vec<&Chunk> = chunks.iter().collect();
    let messages = builder.build_messages("query", &refs);

    assert!(messages[0]
        .content
        .contains("You have access to 2 context chunks."));
}

#[test]
fn selection_result_feeds_prompt_in_commit_order() {
    use contextllm_core::models::SelectionRequest;

    let chunks = vec![
        Chunk::new("A", "Alpha section.", 100, 0.9).with_source("a.md"),
        Chunk::new("B", "Beta section.", 50, 0.5).with_source("b.md"),
        Chunk::new("C", "Gamma section.", 20, 0.4).with_source("c.md"),
    ];
    let result = contextllm_selection::select_chunks(SelectionRequest::new(chunks, 70))
        .expect("selection");

    let builder = PromptBuilder::default();
    let included = result.included_chunks();
    let messages = builder.build_messages("question", &included);

    // Commit order was C then B; A was excluded and never reaches the prompt.
    let system = &messages[0].content;
    let gamma = system.find("Gamma section.").expect("gamma");
    let beta = system.find("Beta section.").expect("beta");
    assert!(gamma < beta);
    assert!(!system.contains("Alpha section."));
    assert!(system.contains("[Context 1 from c.md]"));
}

#[test]
fn simple_prompt_ends_with_answer_cue() {
    let builder = PromptBuilder::default();
    let prompt = builder.build_simple_prompt("Why?", &[]);
    assert!(prompt.contains("Question: Why?"));
    assert!(prompt.ends_with("Answer:"));
}
