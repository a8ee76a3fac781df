//! Server-rendered HTML listing page
//!
//! Small hand-rendered view: the listing table with inline update/delete
//! forms and an add form. All stored text is HTML-escaped on the way out.

use datashelf_core::Record;

/// Render the full listing page.
pub fn listing_page(records: &[Record]) -> String {
    let mut page = String::with_capacity(1024 + records.len() * 256);

    page.push_str(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>datashelf</title>\n\
         </head>\n\
         <body>\n\
         <h1>Records</h1>\n",
    );

    page.push_str(
        "<form method=\"post\" action=\"/add_data\">\n\
         <input type=\"text\" name=\"data\" placeholder=\"value\" maxlength=\"200\" required>\n\
         <input type=\"text\" name=\"data_type\" placeholder=\"category\" maxlength=\"100\" required>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n",
    );

    if records.is_empty() {
        page.push_str("<p>No records yet.</p>\n");
    } else {
        page.push_str(
            "<table>\n\
             <tr><th>ID</th><th>Value</th><th>Category</th><th></th><th></th></tr>\n",
        );

        for record in records {
            render_row(&mut page, record);
        }

        page.push_str("</table>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn render_row(page: &mut String, record: &Record) {
    page.push_str("<tr>");
    page.push_str(&format!("<td>{}</td>", record.id));
    page.push_str(&format!("<td>{}</td>", escape(&record.value)));
    page.push_str(&format!("<td>{}</td>", escape(&record.category)));
    page.push_str(&format!(
        "<td><form method=\"post\" action=\"/update_data/{}\">\
         <input type=\"text\" name=\"data\" value=\"{}\" maxlength=\"200\" required>\
         <button type=\"submit\">Update</button>\
         </form></td>",
        record.id,
        escape(&record.value)
    ));
    page.push_str(&format!(
        "<td><form method=\"post\" action=\"/delete_data/{}\">\
         <button type=\"submit\">Delete</button>\
         </form></td>",
        record.id
    ));
    page.push_str("</tr>\n");
}

/// Escape text for use in HTML body and attribute positions.
fn escape(s: &str) -> String {
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
