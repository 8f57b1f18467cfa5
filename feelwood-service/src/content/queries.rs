//! GROQ查询
//!
//! 引用字段（作者、分类、图片资源）在查询中直接解析成内嵌对象。

/// 全部文章，最新的在前
pub const POSTS: &str = r#"*[_type == "post"] | order(publishedAt desc){
  _id,
  titleTh,
  titleEn,
  excerptTh,
  excerptEn,
  contentTh,
  contentEn,
  publishedAt,
  "slug": slug.current,
  "authorName": author->name,
  "coverImage": coverImage{
    alt,
    "url": asset->url
  },
  "categories": categories[]->{
    _id,
    titleTh,
    titleEn
  }
}"#;

/// 最新的 `$limit` 篇文章，封面图替代文字退回到标题
pub const LATEST_POSTS: &str = r#"*[_type == "post"] | order(publishedAt desc)[0...$limit]{
  _id,
  titleTh,
  titleEn,
  excerptTh,
  excerptEn,
  contentTh,
  contentEn,
  "slug": slug.current,
  publishedAt,
  "authorName": author->name,
  "categories": categories[]->{
    _id,
    titleTh,
    titleEn
  },
  "coverImage": {
    "url": coverImage.asset->url,
    "alt": coalesce(coverImage.alt, titleTh, titleEn)
  }
}"#;

/// 按slug查找单篇文章
pub const POST_BY_SLUG: &str = r#"*[_type == "post" && slug.current == $slug][0]{
  _id,
  titleTh,
  titleEn,
  excerptTh,
  excerptEn,
  contentTh,
  contentEn,
  publishedAt,
  "slug": slug.current,
  "authorName": author->name,
  "coverImage": coverImage{
    alt,
    "url": asset->url
  },
  "categories": categories[]->{
    _id,
    titleTh,
    titleEn
  }
}"#;

/// 产品分类，用于首页卡片和导航菜单
pub const CATEGORIES: &str = r#"*[_type == "category"] | order(titleTh asc){
  _id,
  titleTh,
  titleEn,
  excerptTh,
  excerptEn,
  "slug": slug.current,
  "imageUrl": image.asset->url
}"#;

/// 分类详情及其下的产品，推荐产品在前
pub const CATEGORY_PAGE: &str = r#"*[_type == "category" && slug.current == $slug][0]{
  _id,
  titleTh,
  titleEn,
  excerptTh,
  excerptEn,
  tagsTh,
  tagsEn,
  "imageUrl": image.asset->url,
  "imageAlt": coalesce(image.alt, titleTh, titleEn),
  "products": *[_type == "product" && references(^._id)] | order(isFeatured desc, title asc){
    _id,
    title,
    code,
    summary,
    isFeatured,
    "images": images[]{
      _key,
      "url": asset->url
    },
    "specUrl": specPdf.asset->url
  }
}"#;

/// 全部产品，最新创建的在前
pub const PRODUCTS: &str = r#"*[_type == "product"]{ _id, title } | order(_createdAt desc)"#;

/// 处于启用状态的促销，是否在有效期内由服务层按日期判断
pub const ACTIVE_PROMOTIONS: &str = r#"*[_type == "promotion" && active == true] | order(start desc){
  _id,
  title,
  start,
  end,
  active,
  "banner": {
    "url": banner.asset->url,
    "alt": title
  },
  "featuredProducts": featuredProducts[]->{
    _id,
    title
  }
}"#;
