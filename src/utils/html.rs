use log::warn;

const VIEWER_TEMPLATE: &str = include_str!("../../assets/template/viewer_template.html");

const MAX_INLINE_SIZE: usize = 1_000_000;

/// 模板中的具名插槽
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Title,
    EngineUrl,
    LoaderUrl,
    ModelRoot,
    ModelFile,
}

/// 插槽所在的語境，決定跳脫方式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Context {
    HtmlText,
    HtmlAttribute,
    ScriptString,
}

impl Slot {
    fn from_name(name: &str) -> Option<Slot> {
        match name {
            "TITLE" => Some(Slot::Title),
            "ENGINE_URL" => Some(Slot::EngineUrl),
            "LOADER_URL" => Some(Slot::LoaderUrl),
            "MODEL_ROOT" => Some(Slot::ModelRoot),
            "MODEL_FILE" => Some(Slot::ModelFile),
            _ => None,
        }
    }

    fn context(self) -> Context {
        match self {
            Slot::Title => Context::HtmlText,
            Slot::EngineUrl | Slot::LoaderUrl => Context::HtmlAttribute,
            Slot::ModelRoot | Slot::ModelFile => Context::ScriptString,
        }
    }
}

/// 檢視頁面模板，所有值在填入時依語境跳脫
#[derive(Clone, Debug)]
pub struct ViewerTemplate<'a> {
    pub title: &'a str,
    pub engine_url: &'a str,
    pub loader_url: &'a str,
    pub model_root: &'a str,
    pub model_file: &'a str,
}

impl<'a> ViewerTemplate<'a> {
    fn value(&self, slot: Slot) -> &'a str {
        match slot {
            Slot::Title => self.title,
            Slot::EngineUrl => self.engine_url,
            Slot::LoaderUrl => self.loader_url,
            Slot::ModelRoot => self.model_root,
            Slot::ModelFile => self.model_file,
        }
    }

    pub fn render(&self) -> String {
        self.render_with(VIEWER_TEMPLATE)
    }

    // 單次掃描填入，已填入的值不會再被當成插槽解析
    fn render_with(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 256);
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let name = &after[..end];
                    match Slot::from_name(name) {
                        Some(slot) => out.push_str(&escape(self.value(slot), slot.context())),
                        None => {
                            out.push_str("{{");
                            out.push_str(name);
                            out.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

fn escape(value: &str, context: Context) -> String {
    match context {
        Context::HtmlText | Context::HtmlAttribute => escape_html(value),
        Context::ScriptString => escape_script_string(value),
    }
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 跳脫為可放入 <script> 內雙引號字串的內容
pub fn escape_script_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\u003C"),
            '>' => out.push_str("\\u003E"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04X}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}

/// 將模型 URI 拆為 (根目錄, 檔名)；data URI 整段作為檔名
pub fn split_model_uri(model_uri: &str) -> (&str, &str) {
    if model_uri.starts_with("data:") {
        return ("", model_uri);
    }
    match model_uri.rfind('/') {
        Some(idx) => model_uri.split_at(idx + 1),
        None => ("", model_uri),
    }
}

/// 產生內嵌 glTF 的 data URI，內容為原始 JSON 文字
///
/// 載入器只會直接解析同時含有 `asset` 與 `version` 的 glTF 文字，
/// 無法解碼 base64 形式的 JSON。
pub fn gltf_data_uri(gltf_json: &str, label: &str) -> String {
    if gltf_json.len() > MAX_INLINE_SIZE {
        warn!(
            "內嵌資料過大：{} 位元組，超過建議限制 {} 位元組，可能影響載入：{}",
            gltf_json.len(), MAX_INLINE_SIZE, label
        );
    }
    format!("data:{}", gltf_json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template<'a>(model_root: &'a str, model_file: &'a str) -> ViewerTemplate<'a> {
        ViewerTemplate {
            title: "Quail Viewer",
            engine_url: "https://cdn.example.com/engine.js",
            loader_url: "https://cdn.example.com/loaders.js",
            model_root,
            model_file,
        }
    }

    #[test]
    fn test_render_fills_every_slot() {
        let html = template("file:///ws/.quail_cache/", "ship.gltf").render();
        assert!(html.contains("<title>Quail Viewer</title>"));
        assert!(html.contains(r#"<script src="https://cdn.example.com/engine.js"></script>"#));
        assert!(html.contains(r#"<script src="https://cdn.example.com/loaders.js"></script>"#));
        assert!(html.contains(r#"const MODEL_ROOT = "file:///ws/.quail_cache/";"#));
        assert!(html.contains(r#"const MODEL_FILE = "ship.gltf";"#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_values_are_not_reinterpreted_as_slots() {
        let html = template("", "{{TITLE}}.gltf").render_with("{{MODEL_FILE}}|{{UNKNOWN}}");
        assert_eq!(html, "{{TITLE}}.gltf|{{UNKNOWN}}");
    }

    #[test]
    fn test_unterminated_placeholder_is_kept() {
        let html = template("", "a").render_with("x {{MODEL_FILE");
        assert_eq!(html, "x {{MODEL_FILE");
    }

    #[test]
    fn test_script_string_escaping() {
        assert_eq!(
            escape_script_string("a\"b'</script>\\\n\u{2028}"),
            "a\\\"b\\'\\u003C/script\\u003E\\\\\\n\\u2028"
        );
    }

    #[test]
    fn test_html_escaping() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_split_model_uri() {
        assert_eq!(
            split_model_uri("file:///ws/.quail_cache/ship.gltf"),
            ("file:///ws/.quail_cache/", "ship.gltf")
        );
        assert_eq!(split_model_uri("ship.gltf"), ("", "ship.gltf"));
        assert_eq!(
            split_model_uri(r#"data:{"asset":{"version":"2.0"},"uri":"a/b.bin"}"#),
            ("", r#"data:{"asset":{"version":"2.0"},"uri":"a/b.bin"}"#)
        );
    }

    #[test]
    fn test_gltf_data_uri_keeps_raw_json() {
        let uri = gltf_data_uri(r#"{"asset":{"version":"2.0"}}"#, "a.gltf");
        assert_eq!(uri, r#"data:{"asset":{"version":"2.0"}}"#);

        let html = template("", &uri).render_with("\"{{MODEL_FILE}}\"");
        assert_eq!(html, r#""data:{\"asset\":{\"version\":\"2.0\"}}""#);
    }
}
