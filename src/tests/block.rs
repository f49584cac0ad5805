use super::{html, html_opts};
use ntest::test_case;

#[test_case(
    "$$\nx\n$$",
    "<p class=\"katex-block\"><span class=\"katex\">x</span></p>"
)]
#[test_case(
    "$$\nx = y\nz = w\n$$",
    "<p class=\"katex-block\"><span class=\"katex\">x = y\nz = w</span></p>"
)]
#[test_case(
    "$$a\nb$$",
    "<p class=\"katex-block\"><span class=\"katex\">a\nb</span></p>"
)]
#[test_case(
    "before\n$$\nx\n$$\nafter",
    "before\n<p class=\"katex-block\"><span class=\"katex\">x</span></p>\nafter"
)]
#[test_case(
    "$$\nx\n$$ trailing",
    "<p class=\"katex-block\"><span class=\"katex\">x</span></p> trailing"
)]
fn block_multiline(input: &str, expected: &str) {
    html(input, expected);
}

// No auto-close at end of input: an unterminated opener stays literal.
#[test_case("$$\nx\n", "$$\nx\n")]
#[test_case("$$\nx", "$$\nx")]
#[test_case("\\[\nx\n", "\\[\nx\n")]
#[test_case("$$\n\n$$", "$$\n\n$$")]
#[test_case("$$\n   \n$$", "$$\n   \n$$")]
fn block_rejections(input: &str, expected: &str) {
    html(input, expected);
}

// A display marker opening mid-line closes mid-line too; the suffix is
// surrounding text.
#[test]
fn block_surrounding_text() {
    html(
        "pre $$x$$ post",
        "pre <p class=\"katex-block\"><span class=\"katex\">x</span></p> post",
    );
}

#[test]
fn fenced_math_disabled_by_default() {
    html("```math\n\\pi\n```", "```math\n\\pi\n```");
}

#[test]
fn fenced_math() {
    html_opts(
        "```math\n\\pi\n```",
        "<p class=\"katex-block\"><span class=\"katex\">\\pi</span></p>",
        |options| options.enable_fenced_blocks = true,
    );
}

#[test]
fn fenced_math_multiline_body() {
    html_opts(
        "a\n```math\nx = 1\ny = 2\n```\nb",
        "a\n<p class=\"katex-block\"><span class=\"katex\">x = 1\ny = 2</span></p>\nb",
        |options| options.enable_fenced_blocks = true,
    );
}

// An unterminated fence runs to the end of the input.
#[test]
fn fenced_math_unterminated() {
    html_opts(
        "```math\nx",
        "<p class=\"katex-block\"><span class=\"katex\">x</span></p>",
        |options| options.enable_fenced_blocks = true,
    );
}

// A non-math fence is opaque: nothing inside it is scanned.
#[test]
fn fenced_code_is_opaque() {
    html_opts(
        "```\n$x$\n```\n$y$",
        "```\n$x$\n```\n<span class=\"katex\">y</span>",
        |options| options.enable_fenced_blocks = true,
    );
}

#[test]
fn bare_environment() {
    html_opts(
        "\\begin{align}\nx &= y\n\\end{align}",
        "<p class=\"katex-block\"><span class=\"katex\">\\begin{align}\nx &amp;= y\n\\end{align}</span></p>",
        |options| options.enable_bare_blocks = true,
    );
}

#[test]
fn bare_environment_nested() {
    html_opts(
        "\\begin{aligned}\n\\begin{aligned}x\\end{aligned}\n\\end{aligned}",
        concat!(
            "<p class=\"katex-block\"><span class=\"katex\">",
            "\\begin{aligned}\n\\begin{aligned}x\\end{aligned}\n\\end{aligned}",
            "</span></p>"
        ),
        |options| options.enable_bare_blocks = true,
    );
}

#[test]
fn bare_environment_disabled_by_default() {
    html(
        "\\begin{align}x\\end{align}",
        "\\begin{align}x\\end{align}",
    );
}

#[test]
fn bare_environment_unterminated() {
    html_opts(
        "\\begin{align}\nx",
        "\\begin{align}\nx",
        |options| options.enable_bare_blocks = true,
    );
}

#[test]
fn html_blocks_are_opaque_by_default() {
    html("<div>\n$$x$$\n</div>", "&lt;div&gt;\n$$x$$\n&lt;/div&gt;");
}

#[test]
fn block_math_in_html() {
    html_opts(
        "<div>\n$$x$$\n</div>",
        "&lt;div&gt;\n<p class=\"katex-block\"><span class=\"katex\">x</span></p>\n&lt;/div&gt;",
        |options| options.enable_math_block_in_html = true,
    );
}

#[test]
fn inline_math_in_html() {
    html_opts(
        "<div>$x$ and $$y$$</div>",
        "&lt;div&gt;<span class=\"katex\">x</span> and $$y$$&lt;/div&gt;",
        |options| options.enable_math_inline_in_html = true,
    );
}

// The HTML block ends at the first blank line; scanning resumes after it.
#[test]
fn html_block_ends_at_blank_line() {
    html(
        "<div>\n$x$\n</div>\n\n$y$",
        "&lt;div&gt;\n$x$\n&lt;/div&gt;\n\n<span class=\"katex\">y</span>",
    );
}
