/// 随二进制发布的内置模板
pub const TEMPLATES: [(&str, &str); 9] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("error.html", include_str!("../../templates/error.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("blog.html", include_str!("../../templates/blog.html")),
    ("post.html", include_str!("../../templates/post.html")),
    ("post_modal.html", include_str!("../../templates/post_modal.html")),
    ("products.html", include_str!("../../templates/products.html")),
    ("category.html", include_str!("../../templates/category.html")),
    ("contact.html", include_str!("../../templates/contact.html")),
];
