pub mod a101_product;
pub mod a102_order;
pub mod a103_blog;
pub mod a104_category;
pub mod a105_affiliate_order;
