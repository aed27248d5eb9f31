use ruci::annotation::{AnnotationMessage, escape_data, escape_property};

#[test]
fn test_escape_data_scenarios() {
    // 消息里的换行
    assert_eq!(escape_data("line1\nline2"), "line1%0Aline2");
    // 百分号最先转义
    assert_eq!(escape_data("50% done\r\n"), "50%25 done%0D%0A");
    // 消息转义不动冒号和逗号
    assert_eq!(escape_data("a:b,c"), "a:b,c");
}

#[test]
fn test_escape_property_scenarios() {
    // Windows 路径里的盘符冒号
    assert_eq!(escape_property("C:/x.ts"), "C%3A/x.ts");
    assert_eq!(escape_property("a,b"), "a%2Cb");
    assert_eq!(escape_property("%:,\n"), "%25%3A%2C%0A");
}

#[test]
fn test_message_layout() {
    // 命令后一个空格接第一个属性，其余属性逗号相连无空格
    let line = AnnotationMessage::new("error")
        .property("file", "a.ts")
        .property("line", "10")
        .property("col", "3")
        .property("title", "adds numbers")
        .message("expected 1 to equal 2")
        .render();

    assert_eq!(
        line,
        "::error file=a.ts,line=10,col=3,title=adds numbers::expected 1 to equal 2"
    );
    assert!(line.starts_with("::error file="));
    assert!(!line.contains(", "));
}

#[test]
fn test_message_without_properties() {
    let line = AnnotationMessage::new("error").message("boom").render();
    assert_eq!(line, "::error::boom");
}

#[test]
fn test_message_escapes_title_commas() {
    let line = AnnotationMessage::new("error")
        .property("file", "a.ts")
        .property("title", "works, mostly")
        .message("nope")
        .render();

    assert_eq!(line, "::error file=a.ts,title=works%2C mostly::nope");
}
