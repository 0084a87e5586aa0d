#[cfg(test)]
pub const EXPORT_XML: &str = r##"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0"
	xmlns:excerpt="http://wordpress.org/export/1.2/excerpt/"
	xmlns:content="http://purl.org/rss/1.0/modules/content/"
	xmlns:wfw="http://wellformedweb.org/CommentAPI/"
	xmlns:dc="http://purl.org/dc/elements/1.1/"
	xmlns:wp="http://wordpress.org/export/1.2/"
>

<channel>
	<title>Example blog</title>
	<link>https://example.com/blog</link>
	<description>Just another blog</description>
	<wp:wxr_version>1.2</wp:wxr_version>
	<wp:category>
		<wp:term_id>1</wp:term_id>
		<wp:category_nicename><![CDATA[uncategorized]]></wp:category_nicename>
	</wp:category>

	<item>
		<title><![CDATA[cat]]></title>
		<link>https://example.com/blog/hello-world/cat/</link>
		<pubDate>Mon, 02 Jan 2023 10:29:00 +0000</pubDate>
		<dc:creator><![CDATA[admin]]></dc:creator>
		<content:encoded><![CDATA[]]></content:encoded>
		<excerpt:encoded><![CDATA[]]></excerpt:encoded>
		<wp:post_id>6</wp:post_id>
		<wp:post_name><![CDATA[cat]]></wp:post_name>
		<wp:status><![CDATA[inherit]]></wp:status>
		<wp:post_parent>5</wp:post_parent>
		<wp:post_type><![CDATA[attachment]]></wp:post_type>
		<wp:attachment_url><![CDATA[https://example.com/wp-content/uploads/2023/01/cat.png]]></wp:attachment_url>
	</item>

	<item>
		<title>Hello world &amp; friends</title>
		<link>https://example.com/blog/hello-world/</link>
		<pubDate>Mon, 02 Jan 2023 10:30:00 +0000</pubDate>
		<dc:creator><![CDATA[admin]]></dc:creator>
		<guid isPermaLink="false">https://example.com/blog/?p=5</guid>
		<description></description>
		<content:encoded><![CDATA[<!-- wp:paragraph -->
<p>Welcome to the blog.</p>
<!-- /wp:paragraph -->
<!-- wp:image -->
<figure class="wp-block-image"><img src="/wp-content/uploads/2023/01/cat.png" alt=""/></figure>
<!-- /wp:image -->
<p>And a dog <img class="inline" src="../img/dog.JPG" width="20"></p>]]></content:encoded>
		<excerpt:encoded><![CDATA[A short
excerpt]]></excerpt:encoded>
		<wp:post_id>5</wp:post_id>
		<wp:post_name><![CDATA[hello-world]]></wp:post_name>
		<wp:status><![CDATA[publish]]></wp:status>
		<wp:post_parent>0</wp:post_parent>
		<wp:post_type><![CDATA[post]]></wp:post_type>
		<category domain="category" nicename="News"><![CDATA[News]]></category>
		<category domain="category" nicename="uncategorized"><![CDATA[Uncategorized]]></category>
		<category domain="post_tag" nicename="update"><![CDATA[update]]></category>
		<wp:postmeta>
			<wp:meta_key><![CDATA[_edit_last]]></wp:meta_key>
			<wp:meta_value><![CDATA[1]]></wp:meta_value>
		</wp:postmeta>
		<wp:postmeta>
			<wp:meta_key><![CDATA[_thumbnail_id]]></wp:meta_key>
			<wp:meta_value><![CDATA[6]]></wp:meta_value>
		</wp:postmeta>
		<wp:comment>
			<wp:comment_id>1</wp:comment_id>
			<wp:comment_content><![CDATA[Nice post]]></wp:comment_content>
			<wp:commentmeta>
				<wp:meta_key><![CDATA[akismet_result]]></wp:meta_key>
				<wp:meta_value><![CDATA[false]]></wp:meta_value>
			</wp:commentmeta>
		</wp:comment>
	</item>

	<item>
		<title><![CDATA[Sample Page]]></title>
		<link>https://example.com/blog/sample-page/</link>
		<pubDate>Mon, 02 Jan 2023 09:00:00 +0000</pubDate>
		<dc:creator><![CDATA[admin]]></dc:creator>
		<content:encoded><![CDATA[<p>This is an example page.</p>]]></content:encoded>
		<excerpt:encoded><![CDATA[]]></excerpt:encoded>
		<wp:post_id>7</wp:post_id>
		<wp:post_name><![CDATA[sample-page]]></wp:post_name>
		<wp:status><![CDATA[publish]]></wp:status>
		<wp:post_parent>0</wp:post_parent>
		<wp:post_type><![CDATA[page]]></wp:post_type>
	</item>

	<item>
		<title><![CDATA[About]]></title>
		<link>https://example.com/blog/about/</link>
		<pubDate>Tue, 03 Jan 2023 08:00:00 +0000</pubDate>
		<dc:creator><![CDATA[editor]]></dc:creator>
		<content:encoded><![CDATA[<p>About me <img src="https://cdn.example.com/me.webp"></p>]]></content:encoded>
		<excerpt:encoded><![CDATA[]]></excerpt:encoded>
		<wp:post_id>8</wp:post_id>
		<wp:post_name><![CDATA[%e4%bd%a0%e5%a5%bd-about]]></wp:post_name>
		<wp:status><![CDATA[publish]]></wp:status>
		<wp:post_parent>0</wp:post_parent>
		<wp:post_type><![CDATA[page]]></wp:post_type>
	</item>

	<item>
		<title><![CDATA[Unfinished]]></title>
		<link>https://example.com/blog/?p=9</link>
		<pubDate>Mon, 30 Nov -0001 00:00:00 +0000</pubDate>
		<dc:creator><![CDATA[admin]]></dc:creator>
		<content:encoded><![CDATA[<img src="https://cdn.example.com/draft.png">]]></content:encoded>
		<excerpt:encoded><![CDATA[]]></excerpt:encoded>
		<wp:post_id>9</wp:post_id>
		<wp:post_name><![CDATA[]]></wp:post_name>
		<wp:status><![CDATA[draft]]></wp:status>
		<wp:post_parent>0</wp:post_parent>
		<wp:post_type><![CDATA[post]]></wp:post_type>
	</item>

	<item>
		<title><![CDATA[Home]]></title>
		<link>https://example.com/blog/home/</link>
		<pubDate>Mon, 02 Jan 2023 09:00:00 +0000</pubDate>
		<dc:creator><![CDATA[admin]]></dc:creator>
		<content:encoded><![CDATA[]]></content:encoded>
		<excerpt:encoded><![CDATA[]]></excerpt:encoded>
		<wp:post_id>10</wp:post_id>
		<wp:post_name><![CDATA[home]]></wp:post_name>
		<wp:status><![CDATA[publish]]></wp:status>
		<wp:post_parent>0</wp:post_parent>
		<wp:post_type><![CDATA[nav_menu_item]]></wp:post_type>
	</item>

	<item>
		<title><![CDATA[Old stuff]]></title>
		<link>https://example.com/blog/old-stuff/</link>
		<pubDate>Sun, 01 Jan 2023 12:00:00 +0000</pubDate>
		<dc:creator><![CDATA[admin]]></dc:creator>
		<content:encoded><![CDATA[<p>Gone</p>]]></content:encoded>
		<excerpt:encoded><![CDATA[]]></excerpt:encoded>
		<wp:post_id>12</wp:post_id>
		<wp:post_name><![CDATA[old-stuff__trashed]]></wp:post_name>
		<wp:status><![CDATA[trash]]></wp:status>
		<wp:post_parent>0</wp:post_parent>
		<wp:post_type><![CDATA[post]]></wp:post_type>
	</item>

	<item>
		<title><![CDATA[manual]]></title>
		<link>https://example.com/blog/manual/</link>
		<pubDate>Mon, 02 Jan 2023 10:31:00 +0000</pubDate>
		<dc:creator><![CDATA[admin]]></dc:creator>
		<content:encoded><![CDATA[]]></content:encoded>
		<excerpt:encoded><![CDATA[]]></excerpt:encoded>
		<wp:post_id>11</wp:post_id>
		<wp:post_name><![CDATA[manual]]></wp:post_name>
		<wp:status><![CDATA[inherit]]></wp:status>
		<wp:post_parent>0</wp:post_parent>
		<wp:post_type><![CDATA[attachment]]></wp:post_type>
		<wp:attachment_url><![CDATA[https://example.com/wp-content/uploads/2023/01/manual.pdf]]></wp:attachment_url>
	</item>

	<item>
		<title><![CDATA[Pancakes]]></title>
		<link>https://example.com/blog/recipes/pancakes/</link>
		<pubDate>Wed, 04 Jan 2023 23:15:00 +0000</pubDate>
		<dc:creator><![CDATA[chef]]></dc:creator>
		<content:encoded><![CDATA[<p>Mix it all.</p>]]></content:encoded>
		<excerpt:encoded><![CDATA[Quick
breakfast]]></excerpt:encoded>
		<wp:post_id>13</wp:post_id>
		<wp:post_name><![CDATA[pancakes]]></wp:post_name>
		<wp:status><![CDATA[publish]]></wp:status>
		<wp:post_parent>0</wp:post_parent>
		<wp:post_type><![CDATA[recipe]]></wp:post_type>
		<category domain="post_tag" nicename="breakfast"><![CDATA[Breakfast]]></category>
	</item>
</channel>
</rss>
"##;
