#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::QuestionTemplate;
    use crate::models::dto::sparql::{Binding, SparqlResponse, SparqlResults};

    /// A question whose answer query is `ANSWER <answer>` and whose
    /// wrong-answers query embeds the resolved answer URI.
    pub fn template(answer: &str) -> QuestionTemplate {
        QuestionTemplate::new(
            "What is the capital of {param1}?",
            &format!("ANSWER {}", answer),
            "WRONG FOR <{answer_uri}>",
        )
    }

    /// Single-row correct-answer response for `answer`.
    pub fn answer_response(answer: &str, param1: &str) -> SparqlResponse {
        let binding: Binding = [
            ("answer".to_string(), answer.to_string()),
            (
                "answer_uri".to_string(),
                format!("http://nl.dbpedia.org/resource/{}", answer),
            ),
            ("param1".to_string(), param1.to_string()),
        ]
        .into_iter()
        .collect();

        SparqlResponse {
            results: SparqlResults {
                bindings: vec![binding],
            },
        }
    }

    pub fn wrong_answers_response(answers: &[&str]) -> SparqlResponse {
        let bindings = answers
            .iter()
            .map(|a| {
                [("answer".to_string(), a.to_string())]
                    .into_iter()
                    .collect::<Binding>()
            })
            .collect();

        SparqlResponse {
            results: SparqlResults { bindings },
        }
    }
}

#[cfg(test)]
pub mod http {
    use std::net::SocketAddr;

    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Serves the same canned response to every connection on a local port.
    pub async fn canned_server(status: &'static str, body: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("local listener should bind");
        let addr = listener.local_addr().expect("listener has an address");

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            request.extend_from_slice(&buf[..n]);
                            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                    }
                }

                let response = format!(
                    "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        addr
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_answer_response() {
        let response = answer_response("Assen", "Drenthe");
        let binding = &response.results.bindings[0];

        assert_eq!(binding.value("answer"), Some("Assen"));
        assert_eq!(
            binding.value("answer_uri"),
            Some("http://nl.dbpedia.org/resource/Assen")
        );
    }

    #[test]
    fn test_fixtures_wrong_answers_response() {
        let response = wrong_answers_response(&["a", "b"]);
        assert_eq!(response.results.bindings.len(), 2);
    }

    #[test]
    fn test_fixtures_template() {
        assert_eq!(template("Assen").answer_query(), Some("ANSWER Assen"));
    }
}
