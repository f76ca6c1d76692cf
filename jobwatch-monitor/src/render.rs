//! HTML rendering of job tables
//!
//! Each function returns the complete body of one table: a sequence of
//! `<tr>` rows in input order. Every field value is escaped, so text coming
//! from the server can never inject markup.

use std::fmt::Write;

use jobwatch_core::domain::job::{Job, SubJob};
use v_htmlescape::escape;

/// Rows of the job list tables: id (linked), description, status, statusinfo, created
pub fn render_job_rows(jobs: &[Job]) -> String {
    let mut html = String::new();
    for job in jobs {
        html.push_str("<tr>");
        let _ = writeln!(
            html,
            "<td><a href='/jobs/status/{id}'>{id}</a></td>",
            id = escape(job.id.as_str())
        );
        push_cell(&mut html, &job.description);
        push_cell(&mut html, &job.status);
        push_cell(&mut html, &job.statusinfo);
        push_cell(&mut html, &job.created);
        html.push_str("</tr>");
    }
    html
}

/// Single summary row of the job detail table
pub fn render_job_summary(job: &Job) -> String {
    let mut html = String::from("<tr>");
    for field in [
        &job.description,
        &job.status,
        &job.statusinfo,
        &job.created,
        &job.current,
        &job.submitter,
        &job.result,
    ] {
        push_cell(&mut html, field);
    }
    html.push_str("</tr>");
    html
}

/// Rows of the sub-job table: id, action, status, statusinfo, result, args as JSON
pub fn render_subjob_rows(subjobs: &[SubJob]) -> String {
    let mut html = String::new();
    for subjob in subjobs {
        html.push_str("<tr>");
        push_cell(&mut html, &subjob.id);
        push_cell(&mut html, &subjob.action);
        push_cell(&mut html, &subjob.status);
        push_cell(&mut html, &subjob.statusinfo);
        push_cell(&mut html, &subjob.result);

        let args = serde_json::to_string(&subjob.args).unwrap_or_default();
        let _ = writeln!(
            html,
            "<td style='word-wrap: break-word;white-space:normal;'>{}</td>",
            escape(&args)
        );
        html.push_str("</tr>");
    }
    html
}

fn push_cell(html: &mut String, value: &str) {
    let _ = writeln!(html, "<td>{}</td>", escape(value));
}
