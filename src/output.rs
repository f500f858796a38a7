//! Console display of job search results

use crate::jobs::record::JobRecord;
use colored::Colorize;

/// Renders the end-of-run job listing with per-job cover letter names.
pub struct ResultsDisplay {
    show_cover_letters: bool,
}

impl ResultsDisplay {
    pub fn new(show_cover_letters: bool) -> Self {
        Self { show_cover_letters }
    }

    pub fn print(&self, jobs: &[JobRecord]) {
        println!("{}", self.render(jobs));
    }

    pub fn render(&self, jobs: &[JobRecord]) -> String {
        if jobs.is_empty() {
            return "\nNo jobs found matching your criteria.".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!("\n{}\n", "=== Job Search Results ===".bold()));

        for (i, job) in jobs.iter().enumerate() {
            out.push_str(&format!("\n{}. {}\n", i + 1, job.title.cyan().bold()));
            out.push_str(&format!("   Company: {}\n", job.company));
            out.push_str(&format!("   Location: {}\n", job.location));
            out.push_str(&format!("   URL: {}\n", job.display_url()));

            if self.show_cover_letters {
                if let Some(path) = &job.cover_letter_path {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| path.display().to_string());
                    out.push_str(&format!("   Cover Letter: {}\n", name.green()));
                }
            }
        }

        out
    }
}
