mod bookmark;
mod dispatch;
mod support;
