//! # 脚本生成模块
//!
//! ## 设计思路
//!
//! 将“RGB8 栅格 → 像素调用列表 → Lua 脚本文本”的过程集中管理。
//! 扫描与渲染分离：扫描只负责背景过滤与列优先顺序，渲染只负责把
//! 调用列表填入固定模板。两段都是纯函数，保证相同输入产出
//! 字节级一致的脚本。
//!
//! ## 实现思路
//!
//! 1. 按列优先（x 外层、y 内层）遍历全部坐标
//! 2. 与背景哨兵色逐分量比较，命中则跳过
//! 3. 其余像素生成 `setColorRGB(r, g, b, x, y)` 调用行
//! 4. 头部 wrap + 初始 fill，`_on` / `_off` 函数包裹调用行

use image::Rgb;

use super::Compiler;
use super::source::{DecodedImage, GeneratedScript, PixelCall};
use crate::panel::PanelTarget;

/// Lua 函数体一级缩进。
const CALL_INDENT: &str = "    ";

impl Compiler {
    /// 扫描栅格，过滤背景色，产出列优先顺序的像素调用列表。
    ///
    /// 返回值第二项为被过滤的背景像素数，用于统计与日志。
    pub(super) fn scan_pixels(
        image: &DecodedImage,
        background: Rgb<u8>,
    ) -> (Vec<PixelCall>, usize) {
        let mut calls = Vec::new();
        let mut skipped = 0usize;

        for x in 0..image.width {
            for y in 0..image.height {
                let pixel = *image.rgb.get_pixel(x, y);
                if pixel == background {
                    skipped += 1;
                    continue;
                }

                let Rgb([red, green, blue]) = pixel;
                calls.push(PixelCall {
                    red,
                    green,
                    blue,
                    x,
                    y,
                });
            }
        }

        (calls, skipped)
    }

    /// 将调用列表填入固定模板，生成最终脚本文本。
    ///
    /// 模板结构：
    /// ```lua
    /// {name}_panel = peripheral.wrap("{side:color}")
    /// {name}_panel.fill({bg})
    /// function {name}_on()
    ///     {name}_panel.fill({bg})
    ///     {name}_panel.setColorRGB(r, g, b, x, y) -- 每个保留像素一行
    /// end
    /// function {name}_off()
    ///     {name}_panel.fill({bg})
    /// end
    /// ```
    pub(super) fn render_script(
        image: &DecodedImage,
        name: &str,
        target: &PanelTarget,
        background: Rgb<u8>,
    ) -> GeneratedScript {
        let (calls, skipped) = Self::scan_pixels(image, background);

        let Rgb([bg_red, bg_green, bg_blue]) = background;
        let fill_args = format!("{}, {}, {}", bg_red, bg_green, bg_blue);

        // 预估容量：固定模板 ~200 字节，每条调用行 ~48 字节
        let mut text = String::with_capacity(256 + calls.len() * 48);

        text.push_str(&format!(
            "{}_panel = peripheral.wrap(\"{}\")\n",
            name,
            target.wrap_address()
        ));
        text.push_str(&format!("{}_panel.fill({})\n", name, fill_args));

        text.push_str(&format!("function {}_on()\n", name));
        text.push_str(&format!("{}{}_panel.fill({})\n", CALL_INDENT, name, fill_args));
        for call in &calls {
            text.push_str(&format!(
                "{}{}_panel.setColorRGB({}, {}, {}, {}, {})\n",
                CALL_INDENT, name, call.red, call.green, call.blue, call.x, call.y
            ));
        }
        text.push_str("end\n");

        text.push_str(&format!("function {}_off()\n", name));
        text.push_str(&format!("{}{}_panel.fill({})\n", CALL_INDENT, name, fill_args));
        text.push_str("end\n");

        GeneratedScript {
            text,
            call_count: calls.len(),
            skipped_pixels: skipped,
            width: image.width,
            height: image.height,
        }
    }
}
