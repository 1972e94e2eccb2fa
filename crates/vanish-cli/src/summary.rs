use std::path::Path;

use console::Style;
use vanish_core::compose::submit_target_size;
use vanish_core::remote::RemoteConfig;
use vanish_core::source::SourceImage;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_erase_summary(
    image: &Path,
    source: &SourceImage,
    config: &RemoteConfig,
    output: &Path,
) {
    let s = Styles::new();
    let (width, height) = (source.width(), source.height());
    let (target_w, target_h) = submit_target_size(width, height);

    println!();
    println!("  {}", s.title.apply_to("Vanish"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(image.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();

    println!("  {}", s.header.apply_to("Payload"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Source"),
        s.value.apply_to(format!("{}x{}", width, height))
    );
    if (target_w, target_h) == (width, height) {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Submit"),
            s.value.apply_to(format!("{}x{}", target_w, target_h))
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Submit"),
            s.value.apply_to(format!("{}x{} (downscaled)", target_w, target_h))
        );
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Encoding"),
        s.method.apply_to(source.payload_mime())
    );
    println!();

    println!("  {}", s.header.apply_to("Service"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Model"),
        s.method.apply_to(&config.model)
    );
    if config.api_key.trim().is_empty() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Key"),
            s.disabled.apply_to("not set")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Key"),
            s.method.apply_to("configured")
        );
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Instruction"),
        s.value.apply_to(&config.instruction)
    );
    println!();
}
