use notify_to_app::core::models::{
    ArticleEvent, DestinationKind, NotifierConfig, ShareText, SummaryResult,
};
use notify_to_app::messages::format_notification;
use notify_to_app::messages::slack::{create_text_payload, share_link, single_line};
use notify_to_app::messages::teams::{EXPANDED_ITEMS_ID, card_detail, create_card_payload};
use percent_encoding::percent_decode_str;
use url::Url;

fn event() -> ArticleEvent {
    ArticleEvent {
        category: "Compute".to_string(),
        published_at: "2024-01-01T00:00:00Z".to_string(),
        title: "New Instance Type".to_string(),
        url: "https://example.com/post?id=42&lang=en".to_string(),
        notifier_name: "teamA".to_string(),
    }
}

fn notifier(destination: DestinationKind) -> NotifierConfig {
    NotifierConfig {
        destination,
        webhook_url_parameter_name: "/notify/teamA".to_string(),
        summarizer_name: "AwsSolutionsArchitectEnglish".to_string(),
        share_text: ShareText::default(),
    }
}

fn summary() -> SummaryResult {
    SummaryResult {
        summary: "A new instance type was announced.".to_string(),
        detail: "- 新機能です。\n- benefit two\n".to_string(),
        social_text: "New instance type launched!\nTry it: 100% faster & cheaper #AWS".to_string(),
    }
}

#[test]
fn test_slack_payload_layout() {
    let payload = create_text_payload(&event(), &summary(), &ShareText::default());
    let text = payload["text"].as_str().unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "2024-01-01T00:00:00Z");
    assert_eq!(
        lines[1],
        "<https://example.com/post?id=42&lang=en|New Instance Type>"
    );
    assert_eq!(lines[2], "A new instance type was announced.");
    assert!(text.contains("- 新機能です。\n- benefit two\n"));
    assert!(text.ends_with("|Share on X>"));
    assert!(text.contains("<https://x.com/intent/tweet?url="));
}

#[test]
fn test_share_link_round_trips() {
    let social = single_line(&summary().social_text);
    let article_url = event().url;

    let link = share_link(&article_url, &social);
    let query = link.split_once('?').unwrap().1;
    let (url_param, text_param) = query.split_once('&').unwrap();

    let decoded_url = percent_decode_str(url_param.strip_prefix("url=").unwrap())
        .decode_utf8()
        .unwrap();
    let decoded_text = percent_decode_str(text_param.strip_prefix("text=").unwrap())
        .decode_utf8()
        .unwrap();

    assert_eq!(decoded_url, article_url);
    assert_eq!(decoded_text, social);

    // A standard query parser sees exactly the same two values
    let parsed = Url::parse(&link).unwrap();
    let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("url".to_string(), article_url.clone()),
            ("text".to_string(), social.clone())
        ]
    );
}

#[test]
fn test_share_link_has_no_raw_reserved_characters() {
    let link = share_link("https://example.com/a b", "x & y = z #tag");
    let query = link.split_once('?').unwrap().1;
    assert_eq!(query.matches('&').count(), 1);
    assert!(!query.contains(' '));
    assert!(!query.contains('#'));
    assert_eq!(query.matches('=').count(), 2);
}

#[test]
fn test_slack_share_text_is_decorated_per_notifier() {
    let share_text = ShareText {
        prefix: "🤖 < ".to_string(),
        suffix: " (生成AIによる要約ポスト)".to_string(),
    };
    let payload = create_text_payload(&event(), &summary(), &share_text);
    let text = payload["text"].as_str().unwrap();

    let link = text
        .rsplit_once("\n<")
        .and_then(|(_, tail)| tail.strip_suffix("|Share on X>"))
        .unwrap();
    let parsed = Url::parse(link).unwrap();
    let shared = parsed
        .query_pairs()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.into_owned())
        .unwrap();

    assert_eq!(
        shared,
        format!(
            "🤖 < {} (生成AIによる要約ポスト)",
            single_line(&summary().social_text)
        )
    );
}

#[test]
fn test_share_text_defaults_to_undecorated() {
    let notifier: NotifierConfig = serde_json::from_str(
        r#"{"destination":"slack","webhookUrlParameterName":"/notify/a","summarizerName":"S"}"#,
    )
    .unwrap();
    assert_eq!(notifier.share_text, ShareText::default());
    assert_eq!(notifier.share_text.decorate("post"), "post");

    let decorated: NotifierConfig = serde_json::from_str(
        r#"{"destination":"slack","webhookUrlParameterName":"/notify/a","summarizerName":"S","shareText":{"prefix":"> "}}"#,
    )
    .unwrap();
    assert_eq!(decorated.share_text.decorate("post"), "> post");
}

#[test]
fn test_single_line_strips_newlines() {
    assert_eq!(single_line("one\ntwo\r\nthree"), "onetwothree");
}

#[test]
fn test_teams_card_structure() {
    let payload = create_card_payload(&event(), &summary());

    assert_eq!(payload["type"], "message");
    let attachment = &payload["attachments"][0];
    assert_eq!(
        attachment["contentType"],
        "application/vnd.microsoft.card.adaptive"
    );

    let card = &attachment["content"];
    assert_eq!(card["type"], "AdaptiveCard");
    assert_eq!(card["version"], "1.3");
    assert_eq!(card["msteams"]["width"], "Full");

    let column_items = &card["body"][0]["columns"][0]["items"];
    assert_eq!(column_items[0]["items"][0]["text"], "**New Instance Type**");
    assert_eq!(
        column_items[0]["items"][1]["text"],
        "A new instance type was announced."
    );

    let hidden = &column_items[1];
    assert_eq!(hidden["id"], EXPANDED_ITEMS_ID);
    assert_eq!(hidden["isVisible"], false);
    assert_eq!(hidden["items"][0]["text"], "- 新機能です。\r- benefit two\n");

    let toggle = &card["body"][1]["items"][0]["selectAction"];
    assert_eq!(toggle["type"], "Action.ToggleVisibility");
    assert_eq!(
        toggle["targetElements"],
        serde_json::json!(["collapse", "expand", "expandedItems"])
    );

    let action = &card["actions"][0];
    assert_eq!(action["type"], "Action.OpenUrl");
    assert_eq!(action["title"], "Open Link");
    assert_eq!(action["url"], "https://example.com/post?id=42&lang=en");
}

#[test]
fn test_card_detail_only_touches_sentence_breaks() {
    assert_eq!(card_detail("- 一つ目。\n- two\n"), "- 一つ目。\r- two\n");
}

#[test]
fn test_format_notification_dispatches_on_destination() {
    let slack = format_notification(&notifier(DestinationKind::Slack), &event(), &summary());
    assert!(slack.get("text").is_some());
    assert!(slack.get("attachments").is_none());

    let teams = format_notification(&notifier(DestinationKind::Teams), &event(), &summary());
    assert!(teams.get("attachments").is_some());
    assert!(teams.get("text").is_none());
}
