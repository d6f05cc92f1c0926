use std::time::Duration;

use anyhow::Result;
use mockito::Matcher;
use tokio::net::TcpListener;

use super::*;

const DRIP_BODY: &str = r#"{"list":[{"definition":"cool style","permalink":"http://drip.urbanup.com/1","thumbs_up":10,"author":"a","word":"drip","defid":1,"current_vote":"","written_on":"2018-03-02T00:00:00.000Z","example":"nice drip","thumbs_down":2},{"definition":"water falling","permalink":"http://drip.urbanup.com/2","thumbs_up":3,"author":"b","word":"Drip","defid":2,"current_vote":"","written_on":"2019-05-06T12:30:00.000Z","example":"the tap drips","thumbs_down":1}]}"#;

fn client(url: &str) -> UrbanDictionary {
    return UrbanDictionary::new(url, Duration::from_secs(5));
}

#[test]
fn it_percent_encodes_the_term() {
    let dictionary = client("https://api.urbandictionary.com/");

    assert_eq!(
        dictionary.define_url("drip"),
        "https://api.urbandictionary.com/v0/define?term=drip"
    );
    assert_eq!(
        dictionary.define_url("no cap & bet?"),
        "https://api.urbandictionary.com/v0/define?term=no%20cap%20%26%20bet%3F"
    );
    assert_eq!(
        dictionary.define_url(""),
        "https://api.urbandictionary.com/v0/define?term="
    );
}

#[test]
fn it_defaults_to_the_public_endpoint() {
    let dictionary = UrbanDictionary::default();

    assert_eq!(dictionary.name(), DictionaryName::UrbanDictionary);
    assert!(dictionary
        .define_url("drip")
        .starts_with("https://api.urbandictionary.com/v0/define?term="));
}

#[tokio::test]
async fn it_decodes_definitions() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v0/define")
        .match_query(Matcher::UrlEncoded("term".into(), "drip".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DRIP_BODY)
        .create_async()
        .await;

    let res = client(&server.url()).define("drip").await?;
    mock.assert_async().await;

    assert_eq!(res.len(), 2);
    assert_eq!(res[0].word, "drip");
    assert_eq!(res[0].definition, "cool style");
    assert_eq!(res[0].example, "nice drip");
    assert_eq!(res[1].word, "Drip");
    return Ok(());
}

#[tokio::test]
async fn it_sends_terms_with_spaces() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v0/define")
        .match_query(Matcher::UrlEncoded("term".into(), "no cap".into()))
        .with_status(200)
        .with_body(r#"{"list":[]}"#)
        .create_async()
        .await;

    let res = client(&server.url()).define("no cap").await?;
    mock.assert_async().await;

    assert!(res.is_empty());
    return Ok(());
}

#[tokio::test]
async fn it_sends_an_empty_term() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v0/define")
        .match_query(Matcher::UrlEncoded("term".into(), "".into()))
        .with_status(200)
        .with_body(r#"{"list":[]}"#)
        .create_async()
        .await;

    let res = client(&server.url()).define("").await?;
    mock.assert_async().await;

    assert!(res.is_empty());
    return Ok(());
}

#[tokio::test]
async fn it_decodes_entries_with_missing_and_null_fields() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v0/define")
        .match_query(Matcher::UrlEncoded("term".into(), "drip".into()))
        .with_status(200)
        .with_body(
            r#"{"list":[{"word":"drip","definition":"cool style","example":"nice drip"},{"word":"drip","definition":"water","example":"tap","current_vote":null,"permalink":null}]}"#,
        )
        .create_async()
        .await;

    let res = client(&server.url()).define("drip").await?;

    assert_eq!(res.len(), 2);
    assert_eq!(res[0].word, "drip");
    assert_eq!(res[0].definition, "cool style");
    assert_eq!(res[0].example, "nice drip");
    assert_eq!(res[1].current_vote, "");
    assert_eq!(res[1].permalink, "");
    return Ok(());
}

#[tokio::test]
async fn it_returns_nothing_when_the_list_is_missing() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v0/define")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let res = client(&server.url()).define("drip").await?;

    assert!(res.is_empty());
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_decode_malformed_json() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v0/define")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"list":[{"word":"drip""#)
        .create_async()
        .await;

    let res = client(&server.url()).define("drip").await;

    match res {
        Err(QueryError::Decode(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn it_fails_to_decode_an_error_page() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v0/define")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("<html>Service Unavailable</html>")
        .create_async()
        .await;

    let res = client(&server.url()).define("drip").await;

    assert!(matches!(res, Err(QueryError::Decode(_))));
}

#[tokio::test]
async fn it_times_out_on_a_silent_server() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let mut open = vec![];
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });

    let dictionary = UrbanDictionary::new(&format!("http://{addr}"), Duration::from_millis(200));
    let res = dictionary.define("drip").await;

    match res {
        Err(QueryError::Transport(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected a transport error, got {other:?}"),
    }
    return Ok(());
}

#[tokio::test]
async fn it_fails_when_nothing_is_listening() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let res = client(&format!("http://{addr}")).define("drip").await;

    assert!(matches!(res, Err(QueryError::Transport(_))));
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_build_a_request_for_an_invalid_url() {
    let res = client("not a url").define("drip").await;

    assert!(matches!(res, Err(QueryError::Request(_))));
}
