//! HTML pages served by the web app.

use crate::models::Memo;
use html_escape::{encode_double_quoted_attribute, encode_text};

const STYLE: &str = "body { font-family: sans-serif; max-width: 40em; margin: 2em auto; }
.memo { border-bottom: 1px solid #ddd; padding: 0.5em 0; }
.memo .date { font-weight: bold; }
.memo button { float: right; }";

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
",
        title = encode_text(title),
    )
}

/// Index page. `humanize` turns each stored date into its display label.
pub fn render_index<F>(memos: &[Memo], humanize: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut body = String::from("<h1>Memos</h1>\n<p><a href=\"/add_memo\">Add a memo</a></p>\n");
    if memos.is_empty() {
        body.push_str("<p>No memos yet.</p>\n");
    }
    for memo in memos {
        body.push_str(&format!(
            "<div class=\"memo\" data-date=\"{date_attr}\" data-text=\"{text_attr}\">
<span class=\"date\">{label}</span>
<button class=\"del\">Delete</button>
<p>{text}</p>
</div>
",
            date_attr = encode_double_quoted_attribute(&memo.date),
            text_attr = encode_double_quoted_attribute(&memo.text),
            label = encode_text(&humanize(&memo.date)),
            text = encode_text(&memo.text),
        ));
    }
    body.push_str(
        "<script>
document.querySelectorAll('.memo .del').forEach(function (btn) {
  btn.addEventListener('click', function () {
    var memo = btn.parentElement;
    var q = 'text=' + encodeURIComponent(memo.dataset.text) +
            '&dat=' + encodeURIComponent(memo.dataset.date);
    fetch('/_del_memo?' + q)
      .then(function (resp) { return resp.json(); })
      .then(function (data) {
        if (data.result.stat === 'true') {
          memo.remove();
        }
      });
  });
});
</script>",
    );
    page("Memos", &body)
}

pub fn render_add_memo() -> String {
    page(
        "Add a memo",
        "<h1>Add a memo</h1>
<form id=\"memo-form\">
<p><label>Date <input type=\"date\" name=\"dat\" required></label></p>
<p><label>Memo <textarea name=\"text\" rows=\"4\" cols=\"40\" required></textarea></label></p>
<p><button type=\"submit\">Save</button> <a href=\"/index\">Cancel</a></p>
</form>
<p id=\"status\"></p>
<script>
document.getElementById('memo-form').addEventListener('submit', function (ev) {
  ev.preventDefault();
  var q = new URLSearchParams(new FormData(ev.target)).toString();
  fetch('/_save_memo?' + q)
    .then(function (resp) { return resp.json(); })
    .then(function (data) {
      if (data.result.stat === 'true') {
        window.location = '/index';
      } else {
        document.getElementById('status').textContent = 'Could not save memo.';
      }
    });
});
</script>",
    )
}

pub fn render_not_found(bad_url: &str, linkback: &str) -> String {
    page(
        "Page not found",
        &format!(
            "<h1>Page not found</h1>
<p>Nothing lives at <code>{bad_url}</code>.</p>
<p><a href=\"{linkback}\">Back to the memo list</a></p>",
            bad_url = encode_text(bad_url),
            linkback = encode_double_quoted_attribute(linkback),
        ),
    )
}
