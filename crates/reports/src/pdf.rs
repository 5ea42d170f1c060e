//! PDF encoding of a [`ReportLayout`] with `lopdf`.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::error::ReportError;
use crate::layout::{DrawOp, FontFace, LayoutPage, PAGE_HEIGHT, PAGE_WIDTH, ReportLayout};

const REGULAR_FONT: &[u8] = b"F1";
const BOLD_FONT: &[u8] = b"F2";

fn font_resource(font: FontFace) -> &'static [u8] {
    match font {
        FontFace::Regular => REGULAR_FONT,
        FontFace::Bold => BOLD_FONT,
    }
}

/// Encode text for a standard Type1 font using `WinAnsiEncoding`.
///
/// Latin-1 maps directly; the typographic characters WinAnsi keeps in
/// 0x80..0x9F are mapped explicitly; anything else becomes `?`.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}

fn page_operations(page: &LayoutPage) -> Vec<Operation> {
    let mut ops = Vec::new();
    for op in page.ops() {
        match op {
            DrawOp::Text {
                font,
                size,
                x,
                y,
                text,
            } => {
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "Tf",
                    vec![Object::Name(font_resource(*font).to_vec()), (*size).into()],
                ));
                ops.push(Operation::new("Td", vec![(*x).into(), (*y).into()]));
                ops.push(Operation::new("Tj", vec![Object::string_literal(win_ansi(text))]));
                ops.push(Operation::new("ET", vec![]));
            }
            DrawOp::Rule { x1, x2, y } => {
                ops.push(Operation::new("m", vec![(*x1).into(), (*y).into()]));
                ops.push(Operation::new("l", vec![(*x2).into(), (*y).into()]));
                ops.push(Operation::new("S", vec![]));
            }
        }
    }
    ops
}

fn standard_font(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

/// Build the PDF document for `layout` and serialize it.
pub fn encode(layout: &ReportLayout) -> Result<Vec<u8>, ReportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(standard_font("Helvetica"));
    let bold_id = doc.add_object(standard_font("Helvetica-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(regular_id),
            "F2" => Object::Reference(bold_id),
        },
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(PAGE_WIDTH as i64),
        Object::Integer(PAGE_HEIGHT as i64),
    ];

    let mut kids = Vec::with_capacity(layout.page_count());
    for page in layout.pages() {
        let content = Content {
            operations: page_operations(page),
        };
        let stream = Stream::new(dictionary! {}, content.encode().map_err(ReportError::encode)?);
        let content_id = doc.add_object(stream);

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => Object::Reference(resources_id),
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(page_count),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).map_err(ReportError::encode)?;
    Ok(buf)
}
