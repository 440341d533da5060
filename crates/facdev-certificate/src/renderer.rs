//! Draws the certificate page and assembles the PDF document.

use bytes::Bytes;
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use crate::data::CertificateData;
use crate::layout::{self, MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, wrap_text, x_pt, y_pt};
use crate::metrics::{self, Face};

const BACKGROUND: [f32; 3] = [240.0 / 255.0, 240.0 / 255.0, 250.0 / 255.0];
const PURPLE: [f32; 3] = [139.0 / 255.0, 92.0 / 255.0, 246.0 / 255.0];
const LAVENDER: [f32; 3] = [167.0 / 255.0, 139.0 / 255.0, 250.0 / 255.0];
const GREY: [f32; 3] = [100.0 / 255.0, 100.0 / 255.0, 120.0 / 255.0];
const DARK: [f32; 3] = [30.0 / 255.0, 30.0 / 255.0, 50.0 / 255.0];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

const KAPPA: f32 = 0.552_284_7;

const TITLE_SIZE: f32 = 18.0;
const TITLE_LINE_ADVANCE_MM: f32 = 7.0;

/// Renders one certificate to a finished PDF document.
pub fn render(data: &CertificateData) -> Bytes {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let regular_id = Ref::new(4);
    let bold_id = Ref::new(5);
    let content_id = Ref::new(6);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH_MM * MM, PAGE_HEIGHT_MM * MM));
    page.parent(page_tree_id);
    page.contents(content_id);
    page.resources()
        .fonts()
        .pair(font_name(Face::Regular), regular_id)
        .pair(font_name(Face::Bold), bold_id);
    page.finish();

    pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));
    pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

    let content = build_content(data);
    pdf.stream(content_id, &content.finish());

    Bytes::from(pdf.finish())
}

fn build_content(data: &CertificateData) -> Content {
    let mut content = Content::new();
    let center = PAGE_WIDTH_MM / 2.0;

    set_fill(&mut content, BACKGROUND);
    fill_rect(&mut content, 0.0, 0.0, PAGE_WIDTH_MM, PAGE_HEIGHT_MM);

    set_stroke(&mut content, PURPLE);
    content.set_line_width(2.0 * MM);
    stroke_rect(&mut content, 10.0, 10.0, PAGE_WIDTH_MM - 20.0, PAGE_HEIGHT_MM - 20.0);

    set_stroke(&mut content, LAVENDER);
    content.set_line_width(0.5 * MM);
    stroke_rect(&mut content, 12.0, 12.0, PAGE_WIDTH_MM - 24.0, PAGE_HEIGHT_MM - 24.0);

    set_fill(&mut content, PURPLE);
    fill_circle(&mut content, center, 30.0, 8.0);
    set_fill(&mut content, WHITE);
    show_centered(&mut content, Face::Bold, 16.0, center, 32.0, "FDP");

    set_fill(&mut content, PURPLE);
    show_centered(&mut content, Face::Bold, 36.0, center, 55.0, "CERTIFICATE OF ACHIEVEMENT");

    set_fill(&mut content, GREY);
    show_centered(&mut content, Face::Regular, 12.0, center, 70.0, "This is to certify that");

    set_fill(&mut content, DARK);
    let name = data.faculty_name.to_uppercase();
    show_centered(&mut content, Face::Bold, 28.0, center, 85.0, &name);

    set_fill(&mut content, GREY);
    show_centered(&mut content, Face::Regular, 12.0, center, 95.0, "has successfully completed");

    set_fill(&mut content, DARK);
    let title_lines = wrap_text(Face::Bold, &data.activity_title, TITLE_SIZE, PAGE_WIDTH_MM - 60.0);
    for (index, line) in title_lines.iter().enumerate() {
        let y_mm = 105.0 + index as f32 * TITLE_LINE_ADVANCE_MM;
        show_centered(&mut content, Face::Bold, TITLE_SIZE, center, y_mm, line);
    }
    // The details below shift down with each wrapped title line.
    let offset = 105.0 + title_lines.len() as f32 * TITLE_LINE_ADVANCE_MM;

    set_fill(&mut content, GREY);
    let details = format!(
        "Activity Type: {} | Duration: {}",
        data.activity_kind, data.duration
    );
    show_centered(&mut content, Face::Regular, 12.0, center, offset + 10.0, &details);

    set_fill(&mut content, PURPLE);
    fill_rounded_rect(&mut content, center - 25.0, offset + 18.0, 50.0, 15.0, 3.0);
    set_fill(&mut content, WHITE);
    let score_text = format!("{} Points", data.score);
    show_centered(&mut content, Face::Bold, 16.0, center, offset + 28.0, &score_text);

    set_fill(&mut content, GREY);
    let date_text = format!("Date: {}", data.issue_date);
    show_at(&mut content, Face::Regular, 10.0, 30.0, PAGE_HEIGHT_MM - 25.0, &date_text);
    let id_text = format!("Certificate ID: {}", data.certificate_id);
    show_right(
        &mut content,
        Face::Regular,
        10.0,
        PAGE_WIDTH_MM - 30.0,
        PAGE_HEIGHT_MM - 25.0,
        &id_text,
    );

    set_stroke(&mut content, GREY);
    content.set_line_width(0.5 * MM);
    stroke_line(
        &mut content,
        center - 30.0,
        PAGE_HEIGHT_MM - 35.0,
        center + 30.0,
        PAGE_HEIGHT_MM - 35.0,
    );
    show_centered(
        &mut content,
        Face::Regular,
        10.0,
        center,
        PAGE_HEIGHT_MM - 30.0,
        "Authorized Signature",
    );

    content
}

fn font_name(face: Face) -> Name<'static> {
    match face {
        Face::Regular => Name(b"F1"),
        Face::Bold => Name(b"F2"),
    }
}

fn set_fill(content: &mut Content, rgb: [f32; 3]) {
    content.set_fill_rgb(rgb[0], rgb[1], rgb[2]);
}

fn set_stroke(content: &mut Content, rgb: [f32; 3]) {
    content.set_stroke_rgb(rgb[0], rgb[1], rgb[2]);
}

/// Shows one line of text with its baseline at the given position.
fn show_at(content: &mut Content, face: Face, size: f32, x_mm: f32, y_mm: f32, text: &str) {
    content.begin_text();
    content.set_font(font_name(face), size);
    content.next_line(x_pt(x_mm), y_pt(y_mm));
    content.show(Str(&metrics::encode(text)));
    content.end_text();
}

fn show_centered(
    content: &mut Content,
    face: Face,
    size: f32,
    center_x_mm: f32,
    y_mm: f32,
    text: &str,
) {
    let x_mm = center_x_mm - layout::text_width_mm(face, text, size) / 2.0;
    show_at(content, face, size, x_mm, y_mm, text);
}

fn show_right(
    content: &mut Content,
    face: Face,
    size: f32,
    right_x_mm: f32,
    y_mm: f32,
    text: &str,
) {
    let x_mm = right_x_mm - layout::text_width_mm(face, text, size);
    show_at(content, face, size, x_mm, y_mm, text);
}

/// Rectangles are authored top-left in millimetres and emitted
/// bottom-left in points.
fn fill_rect(content: &mut Content, x_mm: f32, y_mm: f32, w_mm: f32, h_mm: f32) {
    content.rect(x_pt(x_mm), y_pt(y_mm + h_mm), w_mm * MM, h_mm * MM);
    content.fill_nonzero();
}

fn stroke_rect(content: &mut Content, x_mm: f32, y_mm: f32, w_mm: f32, h_mm: f32) {
    content.rect(x_pt(x_mm), y_pt(y_mm + h_mm), w_mm * MM, h_mm * MM);
    content.stroke();
}

fn stroke_line(content: &mut Content, x1_mm: f32, y1_mm: f32, x2_mm: f32, y2_mm: f32) {
    content.move_to(x_pt(x1_mm), y_pt(y1_mm));
    content.line_to(x_pt(x2_mm), y_pt(y2_mm));
    content.stroke();
}

/// Approximates a circle with four cubic segments.
fn fill_circle(content: &mut Content, cx_mm: f32, cy_mm: f32, r_mm: f32) {
    let cx = x_pt(cx_mm);
    let cy = y_pt(cy_mm);
    let r = r_mm * MM;
    let k = KAPPA * r;
    content.move_to(cx + r, cy);
    content.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    content.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    content.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    content.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    content.close_path();
    content.fill_nonzero();
}

fn fill_rounded_rect(
    content: &mut Content,
    x_mm: f32,
    y_mm: f32,
    w_mm: f32,
    h_mm: f32,
    r_mm: f32,
) {
    let left = x_pt(x_mm);
    let right = x_pt(x_mm + w_mm);
    let bottom = y_pt(y_mm + h_mm);
    let top = y_pt(y_mm);
    let r = r_mm * MM;
    let k = KAPPA * r;
    content.move_to(left + r, bottom);
    content.line_to(right - r, bottom);
    content.cubic_to(right - r + k, bottom, right, bottom + r - k, right, bottom + r);
    content.line_to(right, top - r);
    content.cubic_to(right, top - r + k, right - r + k, top, right - r, top);
    content.line_to(left + r, top);
    content.cubic_to(left + r - k, top, left, top - r + k, left, top - r);
    content.line_to(left, bottom + r);
    content.cubic_to(left, bottom + r - k, left + r - k, bottom, left + r, bottom);
    content.close_path();
    content.fill_nonzero();
}
