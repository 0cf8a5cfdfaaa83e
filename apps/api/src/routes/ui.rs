//! Server-rendered HTML for the upload form and the result page.

use crate::parser::ParseOutcome;

const TITLE: &str = "Resume Parser";

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
.error{color:#a40000;background:#fdecea;padding:.5rem 1rem;border-radius:4px}\
.field{white-space:pre-wrap;word-break:break-word}";

const UPLOAD_FORM: &str = r#"<form action="/upload" method="post" enctype="multipart/form-data">
<label for="file">Upload a resume (PDF)</label>
<input id="file" type="file" name="file" accept="application/pdf,.pdf" required>
<button type="submit">Parse</button>
</form>"#;

pub fn upload_page() -> String {
    page(UPLOAD_FORM)
}

pub fn result_page(file_name: Option<&str>, outcome: &ParseOutcome) -> String {
    let mut body = String::new();

    for message in &outcome.errors {
        body.push_str(&error_block(message));
    }

    if let Some(fields) = &outcome.fields {
        body.push_str("<h2>Extracted Information</h2>\n");
        if let Some(name) = file_name {
            body.push_str(&format!("<p><em>{}</em></p>\n", escape_html(name)));
        }
        for (key, value) in fields.iter() {
            body.push_str(&format!(
                "<p class=\"field\"><strong>{}:</strong> {}</p>\n",
                key,
                escape_html(value)
            ));
        }
    }

    body.push_str(UPLOAD_FORM);
    page(&body)
}

pub fn error_page(message: &str) -> String {
    page(&format!("{}{}", error_block(message), UPLOAD_FORM))
}

fn error_block(message: &str) -> String {
    format!("<p class=\"error\">{}</p>\n", escape_html(message))
}

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{TITLE}</h1>\n{body}\n</body>\n</html>\n"
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"R&D"</b> 'x'"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; &#39;x&#39;"
        );
    }

    #[test]
    fn test_upload_page_has_form() {
        let html = upload_page();
        assert!(html.contains("<title>Resume Parser</title>"));
        assert!(html.contains(r#"name="file""#));
    }

    #[test]
    fn test_result_page_without_fields_shows_only_errors() {
        let outcome = ParseOutcome {
            fields: None,
            errors: vec!["Could not extract <text>".to_string()],
        };
        let html = result_page(Some("cv.pdf"), &outcome);
        assert!(html.contains("Could not extract &lt;text&gt;"));
        assert!(!html.contains("Extracted Information"));
    }
}
