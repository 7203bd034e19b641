mod demo;
mod translate;
