use serde::Serialize;
use std::io::{self, Write};

use crate::model::RenderOutput;

#[derive(Serialize)]
struct Payload<'a> {
    text: &'a str,
    tooltip: &'a str,
}

/// Write `output` as one line of JSON, the shape Waybar's `return-type = "json"` expects.
pub fn emit<W: Write>(output: &RenderOutput, mut writer: W) -> io::Result<()> {
    let payload = Payload { text: &output.text, tooltip: output.tooltip.trim() };

    serde_json::to_writer(&mut writer, &payload)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_single_line_object() {
        let output = RenderOutput {
            text: "☀ 21° ".into(),
            tooltip: "\n<b>Now</b>\n---\n\n<small>last update: 10:00:00</small>\n\n".into(),
        };

        let mut buf = Vec::new();
        emit(&output, &mut buf).unwrap();
        let written = String::from_utf8(buf).unwrap();

        assert!(!written.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["text"], "☀ 21° ");
        assert_eq!(value["tooltip"], "<b>Now</b>\n---\n\n<small>last update: 10:00:00</small>");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
