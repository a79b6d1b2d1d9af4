use console::Style;
use once_cell::sync::Lazy;

pub(crate) struct CliStyles {
    pub heading: Style,
    pub prompt: Style,
    pub count: Style,
}

pub(crate) static STYLES: Lazy<CliStyles> = Lazy::new(|| CliStyles {
    heading: Style::new().bold(),
    prompt: Style::new().cyan(),
    count: Style::new().dim(),
});
