//! Shared fixtures for integration tests.
#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use research_scout::config::Config;
use research_scout::tools::ToolContext;

/// One Atom `<entry>` with the given title, publication date and categories.
pub fn atom_entry(title: &str, published: &str, categories: &[&str]) -> String {
    let mut entry = format!(
        "<entry>\n\
         <id>http://arxiv.org/abs/{slug}v1</id>\n\
         <published>{published}</published>\n\
         <title>{title}</title>\n\
         <summary>Abstract for {title}.</summary>\n\
         <author><name>Test Author</name></author>\n",
        slug = title.replace(' ', "-").to_lowercase(),
    );
    if let Some(primary) = categories.first() {
        entry.push_str(&format!(
            "<arxiv:primary_category xmlns:arxiv=\"http://arxiv.org/schemas/atom\" term=\"{primary}\"/>\n"
        ));
    }
    for category in categories {
        entry.push_str(&format!("<category term=\"{category}\"/>\n"));
    }
    entry.push_str("</entry>\n");
    entry
}

/// Wrap entries in an arXiv Atom feed.
pub fn atom_feed(entries: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <feed xmlns=\"http://www.w3.org/2005/Atom\">\n\
         <title>ArXiv Query</title>\n{}</feed>",
        entries.concat()
    )
}

/// A feed of `n` papers published in 2024.
pub fn numbered_feed(n: usize) -> String {
    let entries: Vec<String> = (1..=n)
        .map(|i| atom_entry(&format!("Paper {i}"), "2024-03-01T00:00:00Z", &["cs.LG"]))
        .collect();
    atom_feed(&entries)
}

/// Chat completion body whose reply is `content`.
pub fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// Serve `feed` on the arXiv query path.
pub async fn mount_arxiv(server: &MockServer, feed: String) {
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed))
        .mount(server)
        .await;
}

/// Serve `content` as the model reply.
pub async fn mount_model(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(content)))
        .mount(server)
        .await;
}

/// Tool context with both services pointed at `server`.
pub fn setup_test_context(server: &MockServer) -> ToolContext {
    ToolContext::from_config(&Config::for_testing(&server.uri())).unwrap()
}
