//! PDF rendering — turns a profile plus a generated draft into the final
//! single-column resume PDF.
//!
//! Uses the built-in Helvetica faces so no font embedding is needed; wrapping
//! decisions come from the static metric tables in `layout`. CPU-bound, so
//! callers run this inside `tokio::task::spawn_blocking`.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocumentReference, PdfLayerReference};
use thiserror::Error;

use crate::errors::AppError;
use crate::layout::font_metrics::PT_TO_MM;
use crate::layout::{metrics_for, wrap_words, FontFamily, PageConfig};
use crate::models::draft::{normalize_key, ResumeDraft};
use crate::models::profile::Profile;

const NAME_SIZE: f32 = 16.0;
const HEADER_SIZE: f32 = 12.0;
const ROLE_SIZE: f32 = 11.0;
const BODY_SIZE: f32 = 10.0;
const SMALL_SIZE: f32 = 9.0;

/// Horizontal indent for bullet text, in mm.
const BULLET_INDENT_MM: f32 = 5.0;
/// Vertical gap before each section header, in mm.
const SECTION_GAP_MM: f32 = 3.0;

const EMPTY_PROJECT_PLACEHOLDER: &str = "[No content generated for this project]";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pdf generation failed: {0}")]
    Pdf(String),
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Render(e.to_string())
    }
}

/// Renders the resume and returns the finished PDF bytes.
pub fn render_resume(
    profile: &Profile,
    draft: &ResumeDraft,
    config: &PageConfig,
) -> Result<Vec<u8>, RenderError> {
    let mut page = PageWriter::new(config)?;

    // Header block: name and contact line, centered.
    page.centered_line(&profile.name, FontFamily::HelveticaBold, NAME_SIZE);
    let contact = profile.contact_line();
    if !contact.is_empty() {
        page.centered_line(&contact, FontFamily::Helvetica, BODY_SIZE);
    }

    if !draft.summary.is_empty() {
        page.section_header("SUMMARY");
        for paragraph in draft.summary.lines() {
            page.wrapped(paragraph, FontFamily::Helvetica, BODY_SIZE, 0.0);
        }
    }

    if !draft.skills.is_empty() {
        page.section_header("SKILLS");
        page.wrapped(&draft.skills.join(", "), FontFamily::Helvetica, BODY_SIZE, 0.0);
    }

    if !profile.experience.is_empty() {
        page.section_header("EXPERIENCE");
        for exp in &profile.experience {
            let heading = format!("{} | {} | {} - {}", exp.role, exp.company, exp.start, exp.end);
            page.wrapped(&heading, FontFamily::HelveticaBold, ROLE_SIZE, 0.0);

            let role_drafts = draft.experience.get(&normalize_key(&exp.role));
            for project in &exp.projects {
                page.wrapped(&project.title, FontFamily::HelveticaBold, BODY_SIZE, 0.0);
                let bullets = role_drafts.and_then(|r| r.get(&normalize_key(&project.title)));
                page.bullet_block(bullets);
            }
            page.advance(1.5);
        }
    }

    if !profile.projects.is_empty() {
        page.section_header("PROJECTS");
        for project in &profile.projects {
            page.wrapped(&project.title, FontFamily::HelveticaBold, BODY_SIZE, 0.0);
            page.bullet_block(draft.projects.get(&normalize_key(&project.title)));
        }
    }

    if !profile.education.is_empty() {
        page.section_header("EDUCATION");
        for edu in &profile.education {
            page.wrapped(
                &format!("{} | {}", edu.degree, edu.school),
                FontFamily::HelveticaBold,
                BODY_SIZE,
                0.0,
            );
            let detail = [edu.cgpa.as_str(), edu.year.as_str()]
                .iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join(" | ");
            if !detail.is_empty() {
                page.wrapped(&detail, FontFamily::Helvetica, SMALL_SIZE, 0.0);
            }
        }
    }

    if !profile.certifications.is_empty() {
        page.section_header("CERTIFICATIONS");
        for cert in &profile.certifications {
            page.bullet(cert, SMALL_SIZE);
        }
    }

    if !profile.achievements.is_empty() {
        page.section_header("ACHIEVEMENTS");
        for achievement in &profile.achievements {
            page.bullet(achievement, SMALL_SIZE);
        }
    }

    page.finish()
}

/// Cursor-based writer over a growing PDF document. The cursor tracks the
/// distance from the top of the current page; printpdf's origin is
/// bottom-left, so y coordinates are flipped at draw time.
struct PageWriter<'a> {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    config: &'a PageConfig,
    cursor_mm: f32,
}

impl<'a> PageWriter<'a> {
    fn new(config: &'a PageConfig) -> Result<Self, RenderError> {
        let (doc, page_idx, layer_idx) = printpdf::PdfDocument::new(
            "ATS Resume",
            Mm(config.page_width_mm),
            Mm(config.page_height_mm),
            "content",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let layer = doc.get_page(page_idx).get_layer(layer_idx);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            config,
            cursor_mm: config.margin_mm,
        })
    }

    fn font_ref(&self, font: FontFamily) -> &IndirectFontRef {
        match font {
            FontFamily::Helvetica => &self.regular,
            FontFamily::HelveticaBold => &self.bold,
        }
    }

    fn advance(&mut self, mm: f32) {
        self.cursor_mm += mm;
    }

    /// Starts a new page when fewer than `needed_mm` remain above the margin.
    fn ensure_room(&mut self, needed_mm: f32) {
        let limit = self.config.page_height_mm - self.config.margin_mm;
        if self.cursor_mm + needed_mm > limit {
            let (page_idx, layer_idx) = self.doc.add_page(
                Mm(self.config.page_width_mm),
                Mm(self.config.page_height_mm),
                "content",
            );
            self.layer = self.doc.get_page(page_idx).get_layer(layer_idx);
            self.cursor_mm = self.config.margin_mm;
        }
    }

    /// Draws one line at `x_mm`, advancing the cursor by the line height.
    fn line_at(&mut self, text: &str, font: FontFamily, size_pt: f32, x_mm: f32) {
        let height = line_height_mm(size_pt);
        self.ensure_room(height);
        self.advance(height);
        let y = self.config.page_height_mm - self.cursor_mm;
        self.layer.use_text(
            text,
            size_pt,
            Mm(x_mm),
            Mm(y),
            self.font_ref(font),
        );
    }

    fn centered_line(&mut self, text: &str, font: FontFamily, size_pt: f32) {
        let width = metrics_for(font).measure_mm(text, size_pt);
        let x = (self.config.page_width_mm - width) / 2.0;
        self.line_at(text, font, size_pt, x.max(self.config.margin_mm));
    }

    fn section_header(&mut self, title: &str) {
        self.advance(SECTION_GAP_MM);
        self.line_at(
            title,
            FontFamily::HelveticaBold,
            HEADER_SIZE,
            self.config.margin_mm,
        );
    }

    /// Word-wraps `text` at the available width minus `indent_mm` and draws
    /// each resulting line.
    fn wrapped(&mut self, text: &str, font: FontFamily, size_pt: f32, indent_mm: f32) {
        let max_width = self.config.text_width_mm() - indent_mm;
        let x = self.config.margin_mm + indent_mm;
        for line in wrap_words(text, font, size_pt, max_width) {
            self.line_at(&line, font, size_pt, x);
        }
    }

    /// One bullet: a dash in the margin column, text indented and wrapped.
    fn bullet(&mut self, text: &str, size_pt: f32) {
        let max_width = self.config.text_width_mm() - BULLET_INDENT_MM;
        let x = self.config.margin_mm + BULLET_INDENT_MM;
        for (i, line) in wrap_words(text, FontFamily::Helvetica, size_pt, max_width)
            .into_iter()
            .enumerate()
        {
            let height = line_height_mm(size_pt);
            self.ensure_room(height);
            self.advance(height);
            let y = self.config.page_height_mm - self.cursor_mm;
            if i == 0 {
                self.layer.use_text(
                    "-",
                    size_pt,
                    Mm(self.config.margin_mm),
                    Mm(y),
                    self.font_ref(FontFamily::Helvetica),
                );
            }
            self.layer.use_text(
                line,
                size_pt,
                Mm(x),
                Mm(y),
                self.font_ref(FontFamily::Helvetica),
            );
        }
    }

    /// Draws a project's bullets, or the placeholder when none were generated.
    fn bullet_block(&mut self, bullets: Option<&Vec<String>>) {
        match bullets {
            Some(bullets) if !bullets.is_empty() => {
                for bullet in bullets {
                    self.bullet(bullet, BODY_SIZE);
                }
            }
            _ => self.wrapped(
                EMPTY_PROJECT_PLACEHOLDER,
                FontFamily::Helvetica,
                SMALL_SIZE,
                BULLET_INDENT_MM,
            ),
        }
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }
}

fn line_height_mm(size_pt: f32) -> f32 {
    size_pt * 1.35 * PT_TO_MM
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::layout::default_page_config;

    const SAMPLE_PROFILE: &str = r#"{
        "name": "Jordan Reyes",
        "title": "Software Engineer",
        "email": "jordan@example.com",
        "phone": "+1 555 0100",
        "skills": ["Python", "Docker"],
        "experience": [
            {
                "role": "Software Engineer",
                "company": "Acme Corp",
                "start": "2021",
                "end": "Present",
                "projects": [{"title": "Billing Platform"}, {"title": "Audit Service"}]
            }
        ],
        "projects": [{"title": "Open Source CLI"}],
        "education": [
            {"degree": "B.Sc. Computer Science", "school": "State University", "cgpa": "3.8", "year": "2020"}
        ],
        "certifications": ["AWS Solutions Architect Associate"],
        "achievements": ["Won internal hackathon 2023"]
    }"#;

    fn profile() -> Profile {
        serde_json::from_str(SAMPLE_PROFILE).unwrap()
    }

    fn draft() -> ResumeDraft {
        let mut draft = ResumeDraft {
            summary: "Engineer focused on reliable backend systems.\nShips measurable results."
                .to_string(),
            skills: vec!["Python".into(), "Docker".into(), "Kubernetes".into()],
            ..Default::default()
        };
        let mut billing = HashMap::new();
        billing.insert(
            "billingplatform".to_string(),
            vec!["Cut invoice errors by 35% with idempotent retries".to_string()],
        );
        draft
            .experience
            .insert("softwareengineer".to_string(), billing);
        draft.projects.insert(
            "opensourcecli".to_string(),
            vec!["Shipped 12 releases with automated CI/CD".to_string()],
        );
        draft
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_resume(&profile(), &draft(), &default_page_config()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn test_render_empty_draft_still_produces_pdf() {
        // Profile-only sections (education etc.) render even with no draft content.
        let bytes =
            render_resume(&profile(), &ResumeDraft::default(), &default_page_config()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_long_draft_paginates() {
        let mut long = draft();
        for i in 0..120 {
            long.projects
                .entry("opensourcecli".to_string())
                .or_default()
                .push(format!(
                    "Bullet number {i} describing substantial quantified impact across services"
                ));
        }
        let bytes = render_resume(&profile(), &long, &default_page_config()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        // Multi-page output is strictly larger than the single-page render.
        let single = render_resume(&profile(), &draft(), &default_page_config()).unwrap();
        assert!(bytes.len() > single.len());
    }
}
