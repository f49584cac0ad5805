use crate::{math_to_html, Options};

mod block;
mod delimiters;
mod escaping;

#[track_caller]
pub fn html(input: &str, expected: &str) {
    html_opts(input, expected, |_| ());
}

#[track_caller]
pub fn html_opts<F>(input: &str, expected: &str, setup: F)
where
    F: Fn(&mut Options),
{
    let mut options = Options::default();
    setup(&mut options);
    let output = math_to_html(input, &options).unwrap();
    pretty_assertions::assert_eq!(output, expected);
}
