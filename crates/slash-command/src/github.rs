//! Repository contents client
//!
//! Reads a single file at a given revision through the REST contents API.
//! There is no retry: a failed fetch fails the run.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::{inputs::Repository, Error, Result};

const USER_AGENT: &str = concat!("slash-command/", env!("CARGO_PKG_VERSION"));

/// Body of a contents API response for a single file
#[derive(Debug, Clone, Deserialize)]
pub struct FileContents {
    pub content: String,
    pub encoding: String,
}

impl FileContents {
    /// Decode the file text
    ///
    /// # Errors
    ///
    /// Returns `Error::Decode` for an unsupported encoding, invalid base64,
    /// or content that is not UTF-8.
    pub fn decode(&self) -> Result<String> {
        match self.encoding.to_ascii_lowercase().as_str() {
            "base64" => {
                // The API wraps base64 content at 60 columns.
                let packed: String = self
                    .content
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                let bytes = STANDARD
                    .decode(packed)
                    .map_err(|e| Error::Decode(format!("invalid base64 content: {e}")))?;
                String::from_utf8(bytes)
                    .map_err(|e| Error::Decode(format!("content is not UTF-8: {e}")))
            }
            "utf8" | "utf-8" => Ok(self.content.clone()),
            other => Err(Error::Decode(format!("unsupported content encoding '{other}'"))),
        }
    }
}

pub struct ContentsClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl ContentsClient {
    /// # Errors
    ///
    /// Returns `Error::Fetch` if the HTTP client cannot be built.
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Fetch(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Endpoint for a file, without the revision query
    #[must_use]
    pub fn contents_url(&self, repository: &Repository, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url,
            repository.owner,
            repository.name,
            path.trim_start_matches('/')
        )
    }

    /// Fetch and decode a file at `reference`
    ///
    /// # Errors
    ///
    /// Returns `Error::Fetch` for transport failures or a non-success status,
    /// and `Error::Decode` if the body cannot be decoded.
    pub async fn fetch_file(
        &self,
        repository: &Repository,
        path: &str,
        reference: &str,
    ) -> Result<String> {
        let url = self.contents_url(repository, path);
        tracing::debug!(%url, reference, "fetching configuration");

        let response = self
            .http
            .get(&url)
            .query(&[("ref", reference)])
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("failed to fetch {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!(
                "HTTP {status} when fetching {path} at {reference} from {repository}"
            )));
        }

        let contents: FileContents = response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("unexpected contents response for {path}: {e}")))?;
        contents.decode()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    use super::*;

    /// Answer one HTTP request on a local port with `status` and a JSON
    /// `body`. Returns the API base URL and a handle yielding the raw request.
    pub(crate) async fn serve_once(
        status: &'static str,
        body: String,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let api_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0_u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = socket.read(&mut chunk).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..read]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8(request).unwrap()
        });

        (api_url, handle)
    }

    /// A contents API body for `text`, base64-encoded
    pub(crate) fn base64_body(text: &str) -> String {
        serde_json::json!({
            "type": "file",
            "encoding": "base64",
            "content": STANDARD.encode(text),
        })
        .to_string()
    }

    fn rocket_sled() -> Repository {
        "AcmeCorp/RocketSled".parse().unwrap()
    }

    fn contents(content: &str, encoding: &str) -> FileContents {
        FileContents {
            content: content.to_string(),
            encoding: encoding.to_string(),
        }
    }

    #[test]
    fn test_decode_utf8() {
        let text = contents("value1: 3\nvalue2: 4", "utf8").decode().unwrap();
        assert_eq!(text, "value1: 3\nvalue2: 4");
    }

    #[test]
    fn test_decode_wrapped_base64() {
        // "value1: 3\nvalue2: 4" split across lines the way the API returns it
        let text = contents("dmFsdWUxOiAzCnZh\nbHVlMjogNA==\n", "base64")
            .decode()
            .unwrap();
        assert_eq!(text, "value1: 3\nvalue2: 4");
    }

    #[test]
    fn test_decode_rejects_unknown_encoding() {
        let result = contents("abc", "none").decode();
        assert!(matches!(result, Err(Error::Decode(ref msg)) if msg.contains("'none'")));
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        assert!(matches!(
            contents("***", "base64").decode(),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn test_contents_url() {
        let client = ContentsClient::new("https://api.github.com/", "cafe43").unwrap();
        let repo: Repository = "AcmeCorp/RocketSled".parse().unwrap();
        assert_eq!(
            client.contents_url(&repo, "/path/to/config.yaml"),
            "https://api.github.com/repos/AcmeCorp/RocketSled/contents/path/to/config.yaml"
        );
    }

    #[tokio::test]
    async fn test_fetch_file_sends_revision_and_credentials() {
        let (api_url, server) = serve_once("200 OK", base64_body("value1: 3\nvalue2: 4")).await;
        let client = ContentsClient::new(&api_url, "cafe43").unwrap();

        let text = client
            .fetch_file(&rocket_sled(), "path/to/config.yaml", "aabbccdd")
            .await
            .unwrap();
        assert_eq!(text, "value1: 3\nvalue2: 4");

        let request = server.await.unwrap();
        let mut lines = request.lines();
        assert_eq!(
            lines.next(),
            Some("GET /repos/AcmeCorp/RocketSled/contents/path/to/config.yaml?ref=aabbccdd HTTP/1.1")
        );
        let headers: Vec<String> = lines.map(str::to_ascii_lowercase).collect();
        assert!(headers.iter().any(|h| h == "authorization: bearer cafe43"));
        assert!(headers.iter().any(|h| h == "accept: application/vnd.github+json"));
    }

    #[tokio::test]
    async fn test_fetch_file_maps_error_status() {
        let body = r#"{"message":"Not Found"}"#.to_string();
        let (api_url, server) = serve_once("404 Not Found", body).await;
        let client = ContentsClient::new(&api_url, "cafe43").unwrap();

        let result = client
            .fetch_file(&rocket_sled(), "missing.yaml", "aabbccdd")
            .await;
        assert!(
            matches!(result, Err(Error::Fetch(ref msg)) if msg.contains("404")),
            "unexpected result: {result:?}"
        );
        server.await.unwrap();
    }
}
